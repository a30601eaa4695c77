//! The default command: notes from a file, stdin, or an interactive session.

use anyhow::Result;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, Text};
use std::io::{self, IsTerminal};

use super::report::{self, ReportOptions};
use crate::cli::GenerationArgs;
use crate::completion::OpenAiClient;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::fs::NOTES_FILE_NAME;
use crate::input::{END_MARKER, InputReader};
use crate::notes::{
    GenerateOptions, NotesSource, Outcome, ReleaseNotesGenerator, combine_release_notes,
    join_codes, parse_language_list,
};
use crate::status;
use crate::ui::{Spinner, Style, handle_prompt_cancellation};

pub struct GenerateCommand {
    pub file: Option<String>,
    pub generation: GenerationArgs,
}

pub async fn run_generate(command: GenerateCommand) -> Result<()> {
    let config = load_resolved(&command.generation)?;

    if wants_interactive(&command, io::stdin().is_terminal()) {
        return run_interactive(&config, &command.generation).await;
    }

    let original_text = InputReader::read(command.file.as_deref())?;
    let client = OpenAiClient::new(config.completion_settings())?;
    let generator = ReleaseNotesGenerator::new(client);

    let outcome = {
        let _spinner = Spinner::new("Generating release notes...");
        generator
            .run(
                NotesSource::Text(original_text),
                config.generate_options(),
                None,
            )
            .await
    };

    report::finish(
        outcome,
        &ReportOptions {
            json: command.generation.json,
            output: command.generation.output,
        },
    )
}

/// The guided session runs only for a terminal with no file and no output flags.
fn wants_interactive(command: &GenerateCommand, stdin_is_terminal: bool) -> bool {
    stdin_is_terminal
        && command.file.is_none()
        && !command.generation.json
        && command.generation.output.is_none()
}

/// Rejects a zero length budget, like `resolve_config` does for flags.
pub(super) fn validate_max_length(value: &u32) -> Result<Validation, CustomUserError> {
    if *value == 0 {
        Ok(Validation::Invalid("Maximum length must be greater than zero".into()))
    } else {
        Ok(Validation::Valid)
    }
}

/// Merges CLI flags with the config file.
pub fn load_resolved(args: &GenerationArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();
    Ok(resolve_config(&resolve_options(args), &file_config)?)
}

/// Turns the shared generation flags into config overrides.
pub fn resolve_options(args: &GenerationArgs) -> ResolveOptions {
    ResolveOptions {
        provider: args.provider.clone(),
        model: args.model.clone(),
        languages: args
            .languages
            .as_deref()
            .map(parse_language_list),
        max_length: args.max_length,
    }
}

async fn run_interactive(config: &ResolvedConfig, args: &GenerationArgs) -> Result<()> {
    println!("{}", Style::header("App Store Release Notes Generator"));
    println!(
        "Paste the original release notes, then type {} on its own line:",
        Style::code(END_MARKER)
    );

    let original_text = InputReader::read_until_marker(io::stdin().lock())?;

    let mut options = config.generate_options();
    let mut cancelled = true;
    handle_prompt_cancellation(|| {
        options = ask_options(&options, args)?;
        cancelled = false;
        Ok(())
    })?;
    if cancelled {
        return Ok(());
    }

    let client = OpenAiClient::new(config.completion_settings())?;
    let generator = ReleaseNotesGenerator::new(client);

    let outcome = {
        let _spinner = Spinner::new("Generating release notes...");
        generator
            .run(NotesSource::Text(original_text), options, None)
            .await
    };

    let generated = match outcome {
        Outcome::Success(generated) => generated,
        Outcome::Failure(e) => return Err(e.into()),
    };

    report::print_sections(&generated);

    let combined = combine_release_notes(&generated.release_notes, &generated.languages);
    println!();
    println!("{}", Style::header("=== Combined Release Notes ==="));
    println!("{combined}");

    handle_prompt_cancellation(|| {
        let save = Confirm::new(&format!("Save to {NOTES_FILE_NAME}?"))
            .with_default(false)
            .prompt()?;
        if save {
            report::save_combined(&generated, NOTES_FILE_NAME)?;
        } else {
            status!("{}", Style::secondary("Not saved."));
        }
        Ok(())
    })
}

/// Asks for whatever the flags left open.
fn ask_options(current: &GenerateOptions, args: &GenerationArgs) -> Result<GenerateOptions> {
    let languages = if args.languages.is_some() {
        current.languages.clone()
    } else {
        let input = Text::new("Languages (comma-separated codes):")
            .with_default(&join_codes(&current.languages))
            .with_help_message("e.g. en,sv,fr")
            .prompt()?;
        parse_language_list(&input)
    };

    let max_length = if args.max_length.is_some() {
        current.max_length
    } else {
        CustomType::<u32>::new("Maximum length per language:")
            .with_default(current.max_length)
            .with_error_message("Please enter a positive number")
            .with_validator(validate_max_length)
            .prompt()?
    };

    Ok(GenerateOptions {
        max_length,
        languages,
    })
}
