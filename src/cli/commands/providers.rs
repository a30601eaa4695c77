//! Provider listing command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigManager, DEFAULT_PROVIDER};
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// With `specific_provider`, shows details for that provider only. The
/// built-in `openai` provider is always listed unless the file overrides it.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();
    let providers = config.all_providers();

    let default_provider = config
        .storenotes
        .provider
        .as_deref()
        .unwrap_or(DEFAULT_PROVIDER);

    if let Some(provider_name) = specific_provider {
        let Some(provider) = providers.get(provider_name) else {
            bail!("Provider '{provider_name}' not found");
        };

        let marker = if default_provider == provider_name {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!("{} {}{marker}", Style::header("Provider:"), provider_name);
        println!("  {} = {}", Style::label("endpoint"), provider.endpoint);
        if provider.requires_api_key() {
            let has_key = provider.get_api_key().is_some();
            println!(
                "  {}  = {}",
                Style::label("api_key"),
                if has_key {
                    Style::success("(set)")
                } else {
                    Style::warning("(not set)")
                }
            );
        }
        if provider.models.is_empty() {
            println!(
                "  {}   = {}",
                Style::label("models"),
                Style::secondary("(none configured)")
            );
        } else {
            println!("  {}:", Style::label("models"));
            for model in &provider.models {
                println!("    - {}", Style::value(model));
            }
        }
    } else {
        println!("{}\n", Style::header("Configured providers"));
        for (name, provider) in &providers {
            let marker = if default_provider == name {
                format!(" {}", Style::default_marker())
            } else {
                String::new()
            };
            println!("  {}{marker}", Style::code(name));
            println!(
                "    {} {}",
                Style::secondary("endpoint:"),
                provider.endpoint
            );
            if !provider.models.is_empty() {
                println!(
                    "    {} {}",
                    Style::secondary("models:"),
                    provider.models.join(", ")
                );
            }
        }
    }

    Ok(())
}
