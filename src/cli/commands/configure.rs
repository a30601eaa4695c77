//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Select, Text};

use super::generate::validate_max_length;
use crate::config::{ConfigFile, ConfigManager, DEFAULT_PROVIDER};
use crate::notes::{DEFAULT_MAX_LENGTH, LanguageCode, join_codes, parse_language_list};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current defaults and exits. Otherwise asks for the
/// default provider, model, languages and length budget, then saves them.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default();
        println!(
            "{} {}\n",
            Style::secondary("Config file:"),
            manager.config_path().display()
        );
        print_current_defaults(&config);
        return Ok(());
    }

    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_current_defaults(&config);

    let provider_names: Vec<String> = config.all_providers().into_keys().collect();
    let provider = select_provider(&provider_names, config.storenotes.provider.as_deref())?;

    let available_models = config
        .provider(&provider)
        .map(|p| p.models)
        .unwrap_or_default();
    let model = select_model(&available_models, config.storenotes.model.as_deref())?;

    let languages = ask_languages(config.storenotes.languages.as_deref())?;

    let max_length = CustomType::<u32>::new("Default maximum length:")
        .with_default(config.storenotes.max_length.unwrap_or(DEFAULT_MAX_LENGTH))
        .with_error_message("Please enter a positive number")
        .with_validator(validate_max_length)
        .prompt()?;

    config.storenotes.provider = Some(provider);
    config.storenotes.model = Some(model);
    config.storenotes.languages = Some(
        languages
            .iter()
            .map(|code| code.as_str().to_string())
            .collect(),
    );
    config.storenotes.max_length = Some(max_length);

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let defaults = &config.storenotes;
    let or_unset = |value: Option<String>| {
        value.map_or_else(|| Style::secondary("(not set)"), Style::value)
    };

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}    {}",
        Style::label("provider"),
        or_unset(defaults.provider.clone())
    );
    println!(
        "  {}       {}",
        Style::label("model"),
        or_unset(defaults.model.clone())
    );
    println!(
        "  {}   {}",
        Style::label("languages"),
        or_unset(defaults.languages.as_ref().map(|codes| codes.join(",")))
    );
    println!(
        "  {}  {}",
        Style::label("max_length"),
        or_unset(defaults.max_length.map(|n| n.to_string()))
    );
    println!();
}

fn select_provider(providers: &[String], default: Option<&str>) -> Result<String> {
    let default_index = default
        .or(Some(DEFAULT_PROVIDER))
        .and_then(|d| providers.iter().position(|p| p == d))
        .unwrap_or(0);

    let selection = Select::new("Default provider:", providers.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if available_models.is_empty() {
        let mut prompt = Text::new("Default model:").with_help_message("Enter the model name");

        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;

        if model.trim().is_empty() {
            bail!("Model name cannot be empty");
        }

        Ok(model.trim().to_string())
    } else {
        let default_index = default
            .and_then(|d| available_models.iter().position(|m| m == d))
            .unwrap_or(0);

        let selection = Select::new("Default model:", available_models.to_vec())
            .with_starting_cursor(default_index)
            .prompt()?;

        Ok(selection)
    }
}

fn ask_languages(current: Option<&[String]>) -> Result<Vec<LanguageCode>> {
    let current = current.map_or_else(
        || join_codes(&LanguageCode::defaults()),
        |codes| codes.join(","),
    );

    let input = Text::new("Default languages:")
        .with_default(&current)
        .with_help_message("Comma-separated codes, in output order (see `storenotes languages`)")
        .prompt()?;

    Ok(parse_language_list(&input))
}
