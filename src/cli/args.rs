use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "storenotes")]
#[command(about = "Turns technical release notes into friendly, multi-language app store notes")]
#[command(version)]
pub struct Args {
    /// File with the original release notes (reads stdin, or asks interactively, if not provided)
    pub file: Option<String>,

    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command that generates notes.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GenerationArgs {
    /// Comma-separated language codes, in output order (e.g., en,sv,fr)
    #[arg(short = 'l', long)]
    pub languages: Option<String>,

    /// Maximum character length for each language's notes
    #[arg(short = 'm', long)]
    pub max_length: Option<u32>,

    /// Provider name from the config file
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(long)]
    pub model: Option<String>,

    /// Write the combined notes to this file
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Print the result envelope as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate store notes from a GitHub release
    Release {
        /// Repository in owner/repo form
        #[arg(short = 'r', long)]
        repo: String,

        /// Release tag, or "latest"
        #[arg(short = 't', long, default_value = "latest")]
        tag: String,

        /// GitHub token (defaults to the GITHUB_TOKEN environment variable)
        #[arg(long)]
        token: Option<String>,

        #[command(flatten)]
        generation: GenerationArgs,
    },
    /// Run as a GitHub Action step (reads INPUT_* variables)
    Action,
    /// List known language codes
    Languages,
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
