//! # storenotes - App Store Release Notes Generator
//!
//! `storenotes` turns technical release notes into short, consumer-friendly
//! app store notes in several languages with a single completion request
//! against an OpenAI-compatible endpoint.
//!
//! ## Features
//!
//! - **Multi-language output**: One request, one tagged section per language
//! - **GitHub releases**: Use a published release body as the input
//! - **GitHub Actions**: `storenotes action` reads `INPUT_*` and writes step outputs
//! - **Multiple providers**: Configure and switch between API providers
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate from a file
//! storenotes ./CHANGELOG-2.4.md
//!
//! # From stdin, in Japanese and German
//! cat notes.md | storenotes -l ja,de
//!
//! # From the latest GitHub release
//! storenotes release --repo acme/widgets
//!
//! # Interactive session
//! storenotes
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/storenotes/config.toml`:
//!
//! ```toml
//! [storenotes]
//! provider = "openai"
//! model = "gpt-4o"
//! languages = ["en", "sv", "fr"]
//! max_length = 500
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["gemma3:12b"]
//! ```

/// GitHub Actions inputs, outputs and entry point.
pub mod action;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Chat completion client for OpenAI-compatible APIs.
pub mod completion;

/// Configuration file management and provider settings.
pub mod config;

/// Error types shared by the library.
pub mod error;

/// File system utilities.
pub mod fs;

/// GitHub release lookup.
pub mod github;

/// Input reading from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Prompt building, response parsing and the generation workflow.
pub mod notes;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
