use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use storenotes_cli::cli::commands::{action, configure, generate, providers, release};
use storenotes_cli::cli::{Args, Command};
use storenotes_cli::error::NotesError;
use storenotes_cli::notes::print_languages;
use storenotes_cli::output::{self, OutputConfig};
use storenotes_cli::{logging, ui};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init_logger(args.verbose);

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            ui::print_error(&format!("{e:#}"));
            let code = e
                .downcast_ref::<NotesError>()
                .map_or(exitcode::SOFTWARE, NotesError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Action) => {
            return action::run_action_command().await;
        }
        Some(Command::Release {
            repo,
            tag,
            token,
            generation,
        }) => {
            let command = release::ReleaseCommand {
                repo,
                tag,
                token,
                generation,
            };
            release::run_release(command).await?;
        }
        None => {
            let command = generate::GenerateCommand {
                file: args.file,
                generation: args.generation,
            };
            generate::run_generate(command).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
