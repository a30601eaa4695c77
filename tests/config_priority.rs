//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use std::collections::BTreeMap;
use storenotes_cli::config::{
    ConfigFile, DefaultsConfig, GitHubConfig, ProviderConfig, ResolveOptions, resolve_config,
};
use storenotes_cli::notes::LanguageCode;

fn make_config_with_defaults() -> ConfigFile {
    let mut providers = BTreeMap::new();
    providers.insert(
        "test_provider".to_string(),
        ProviderConfig {
            endpoint: "http://test.local".to_string(),
            api_key: Some("test_key".to_string()),
            api_key_env: None,
            models: vec!["test_model".to_string(), "config_model".to_string()],
        },
    );
    providers.insert(
        "other_provider".to_string(),
        ProviderConfig {
            endpoint: "http://other.local".to_string(),
            api_key: Some("other_key".to_string()),
            api_key_env: None,
            models: vec!["other_model".to_string()],
        },
    );

    ConfigFile {
        storenotes: DefaultsConfig {
            provider: Some("test_provider".to_string()),
            model: Some("config_model".to_string()),
            languages: Some(vec!["ja".to_string(), "de".to_string()]),
            max_length: Some(300),
            ..DefaultsConfig::default()
        },
        providers,
        github: GitHubConfig::default(),
    }
}

fn codes(list: &[&str]) -> Vec<LanguageCode> {
    list.iter().map(|code| LanguageCode::new(code)).collect()
}

#[test]
fn test_config_defaults_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.provider_name, "test_provider");
    assert_eq!(resolved.model, "config_model");
    assert_eq!(resolved.languages, codes(&["ja", "de"]));
    assert_eq!(resolved.max_length, 300);
    assert_eq!(resolved.api_key.as_deref(), Some("test_key"));
}

#[test]
fn test_cli_languages_override_config_languages() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        languages: Some(codes(&["fr", "pt-br"])),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.languages, codes(&["fr", "pt-br"]));
}

#[test]
fn test_cli_max_length_overrides_config_max_length() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        max_length: Some(120),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.max_length, 120);
    assert_eq!(resolved.generate_options().max_length, 120);
}

#[test]
fn test_cli_model_overrides_config_model() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        model: Some("test_model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.model, "test_model");
}

#[test]
fn test_cli_provider_overrides_config_provider() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        provider: Some("other_provider".to_string()),
        model: Some("other_model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "other_provider");
    assert_eq!(resolved.endpoint, "http://other.local");
    assert_eq!(resolved.api_key.as_deref(), Some("other_key"));
}

#[test]
fn test_builtin_defaults_apply_with_empty_config() {
    let mut config = ConfigFile::default();
    config.providers.insert(
        "openai".to_string(),
        ProviderConfig {
            endpoint: "https://api.openai.com".to_string(),
            api_key: Some("sk-file".to_string()),
            api_key_env: None,
            models: Vec::new(),
        },
    );

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.provider_name, "openai");
    assert_eq!(resolved.model, "gpt-4o");
    assert_eq!(resolved.languages, codes(&["en", "sv", "fr"]));
    assert_eq!(resolved.max_length, 500);
}

#[test]
fn test_all_cli_options_override_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        provider: Some("other_provider".to_string()),
        model: Some("cli_model".to_string()),
        languages: Some(codes(&["es"])),
        max_length: Some(50),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "other_provider");
    assert_eq!(resolved.model, "cli_model");
    assert_eq!(resolved.languages, codes(&["es"]));
    assert_eq!(resolved.max_length, 50);
}
