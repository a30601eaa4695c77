//! Subcommand implementations.

/// GitHub Actions step.
pub mod action;

/// Configure command handler.
pub mod configure;

/// Default command: notes from a file, stdin, or an interactive session.
pub mod generate;

/// Provider listing command handler.
pub mod providers;

/// Notes from a published GitHub release.
pub mod release;

mod report;
