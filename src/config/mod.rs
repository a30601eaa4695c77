mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_GITHUB_TOKEN_ENV,
    DEFAULT_MODEL, DEFAULT_PROVIDER, DefaultsConfig, GitHubConfig, ProviderConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};
