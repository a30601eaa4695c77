use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::completion::{
    CompletionSettings, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
};
use crate::error::NotesError;
use crate::github::DEFAULT_API_URL;
use crate::notes::{DEFAULT_MAX_LENGTH, GenerateOptions, LanguageCode};
use crate::paths;
use crate::ui::Style;

pub const DEFAULT_PROVIDER: &str = "openai";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Default settings in the `[storenotes]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// Default output languages, in order.
    pub languages: Option<Vec<String>>,
    /// Default character budget.
    pub max_length: Option<u32>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_secs: Option<u64>,
}

/// Configuration for a completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// List of available models for this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// The provider used when none is configured.
    pub fn builtin_openai() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            api_key_env: Some(DEFAULT_API_KEY_ENV.to_string()),
            models: vec![DEFAULT_MODEL.to_string()],
        }
    }

    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The `[github]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubConfig {
    pub api_url: Option<String>,
    /// Environment variable holding the token.
    pub token_env: Option<String>,
}

impl GitHubConfig {
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn token(&self) -> Option<String> {
        let env_var = self.token_env.as_deref().unwrap_or(DEFAULT_GITHUB_TOKEN_ENV);
        std::env::var(env_var).ok().filter(|token| !token.is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/storenotes/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub storenotes: DefaultsConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderConfig>,
    #[serde(default)]
    pub github: GitHubConfig,
}

impl ConfigFile {
    /// Looks up a provider, falling back to the built-in `openai` entry.
    pub fn provider(&self, name: &str) -> Option<ProviderConfig> {
        self.providers
            .get(name)
            .cloned()
            .or_else(|| (name == DEFAULT_PROVIDER).then(ProviderConfig::builtin_openai))
    }

    /// Configured providers plus the built-in one when not overridden.
    pub fn all_providers(&self) -> BTreeMap<String, ProviderConfig> {
        let mut providers = self.providers.clone();
        providers
            .entry(DEFAULT_PROVIDER.to_string())
            .or_insert_with(ProviderConfig::builtin_openai);
        providers
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// The selected provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for generation.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
    pub languages: Vec<LanguageCode>,
    pub max_length: u32,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl ResolvedConfig {
    pub fn completion_settings(&self) -> CompletionSettings {
        CompletionSettings {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            timeout: self.timeout,
        }
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            max_length: self.max_length,
            languages: self.languages.clone(),
        }
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Provider name override.
    pub provider: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// Language list override.
    pub languages: Option<Vec<LanguageCode>>,
    /// Character budget override.
    pub max_length: Option<u32>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over the built-in defaults.
///
/// # Errors
///
/// Returns [`NotesError::Config`] if the provider is unknown, its API key is
/// missing, or a numeric setting is out of range.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, NotesError> {
    let defaults = &config_file.storenotes;

    let provider_name = options
        .provider
        .as_ref()
        .or(defaults.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let provider_config = config_file.provider(&provider_name).ok_or_else(|| {
        let available = config_file
            .all_providers()
            .into_keys()
            .collect::<Vec<_>>()
            .join("\n  - ");
        NotesError::Config(format!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {available}\n\n\
             Add providers to ~/.config/storenotes/config.toml"
        ))
    })?;

    let model = options
        .model
        .as_ref()
        .or(defaults.model.as_ref())
        .cloned()
        .or_else(|| provider_config.models.first().cloned())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // Warn if model is not in provider's models list
    if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
        log::warn!(
            "Model '{}' is not in the configured models list for '{}' ({}); proceeding anyway",
            model,
            provider_name,
            provider_config.models.join(", ")
        );
    }

    let languages = options
        .languages
        .clone()
        .filter(|languages| !languages.is_empty())
        .or_else(|| {
            defaults
                .languages
                .as_ref()
                .map(|codes| codes.iter().map(|code| LanguageCode::new(code)).collect())
                .filter(|languages: &Vec<LanguageCode>| !languages.is_empty())
        })
        .unwrap_or_else(LanguageCode::defaults);

    let max_length = options
        .max_length
        .or(defaults.max_length)
        .unwrap_or(DEFAULT_MAX_LENGTH);
    if max_length == 0 {
        return Err(NotesError::Config(
            "max_length must be greater than zero".to_string(),
        ));
    }

    let temperature = defaults.temperature.unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        return Err(NotesError::Config(format!(
            "temperature must be between 0.0 and 2.0, got {temperature}"
        )));
    }

    let api_key = provider_config.get_api_key();

    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        return Err(NotesError::Config(format!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/storenotes/config.toml"
        )));
    }

    Ok(ResolvedConfig {
        provider_name,
        endpoint: provider_config.endpoint,
        model,
        api_key,
        languages,
        max_length,
        max_tokens: defaults.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        temperature,
        timeout: Duration::from_secs(defaults.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/storenotes/config.toml`
    /// or `~/.config/storenotes/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// A manager for an explicit file, e.g. `--config <path>`.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        crate::fs::atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config, using defaults when the file does not exist.
    ///
    /// A file that exists but cannot be parsed is reported and then ignored.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }
        self.load().unwrap_or_else(|e| {
            crate::warn!("{} {e:#}", Style::warning("Warning:"));
            ConfigFile::default()
        })
    }
}
