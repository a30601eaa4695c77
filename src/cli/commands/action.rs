//! `storenotes action`: the GitHub Actions step.

use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::action::{ActionInputs, collect_outputs, format_output, run_action, write_outputs};
use crate::notes::Outcome;

/// Runs the action and reports failures as workflow annotations.
///
/// Exits with status 1 on any failure, as the runner expects.
pub async fn run_action_command() -> Result<ExitCode> {
    let outcome = match ActionInputs::from_env() {
        Ok(inputs) => run_action(&inputs).await,
        Err(e) => Outcome::Failure(e),
    };

    let generated = match outcome {
        Outcome::Success(generated) => generated,
        Outcome::Failure(e) => {
            println!("::error::Action failed with error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let outputs = collect_outputs(&generated.release_notes, &generated.languages);

    match std::env::var_os("GITHUB_OUTPUT").filter(|path| !path.is_empty()) {
        Some(path) => {
            if let Err(e) = write_outputs(&PathBuf::from(path), &outputs) {
                println!("::error::Action failed with error: {e:#}");
                return Ok(ExitCode::FAILURE);
            }
        }
        None => {
            for (name, value) in &outputs {
                print!("{}", format_output(name, value));
            }
        }
    }

    println!(
        "Successfully generated app store release notes in {} languages",
        generated.languages.len()
    );

    Ok(ExitCode::SUCCESS)
}
