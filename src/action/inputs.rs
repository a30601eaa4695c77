use crate::config::DEFAULT_MODEL;
use crate::error::{NotesError, Result};
use crate::github::{DEFAULT_API_URL, ReleaseTag, RepoRef};
use crate::notes::{DEFAULT_MAX_LENGTH, LanguageCode, parse_language_list};

/// Everything the action needs from the runner environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInputs {
    pub github_token: String,
    pub openai_api_key: String,
    pub release_tag: ReleaseTag,
    pub max_length: u32,
    pub languages: Vec<LanguageCode>,
    pub model: String,
    pub api_endpoint: Option<String>,
    pub repository: RepoRef,
    pub github_api_url: String,
}

impl ActionInputs {
    /// Reads inputs from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads inputs through `lookup`, which maps variable names to values.
    ///
    /// Input `foo_bar` is read from `INPUT_FOO_BAR`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let input = |name: &str| {
            lookup(&format!("INPUT_{}", name.to_uppercase()))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |name: &str| {
            input(name)
                .ok_or_else(|| NotesError::Config(format!("Input required and not supplied: {name}")))
        };

        let github_token = required("github_token")?;
        let openai_api_key = required("openai_api_key")?;

        let max_length = match input("max_length") {
            Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                NotesError::Config(format!(
                    "Input max_length must be a positive integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_MAX_LENGTH,
        };

        let repository: RepoRef = lookup("GITHUB_REPOSITORY")
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                NotesError::Config("GITHUB_REPOSITORY is not set; run inside GitHub Actions".into())
            })?
            .parse()?;

        Ok(Self {
            github_token,
            openai_api_key,
            release_tag: ReleaseTag::parse(&input("release_tag").unwrap_or_default()),
            max_length,
            languages: parse_language_list(&input("languages").unwrap_or_default()),
            model: input("model").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_endpoint: input("api_endpoint"),
            repository,
            github_api_url: lookup("GITHUB_API_URL")
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}
