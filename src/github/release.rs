use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{NotesError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("storenotes/", env!("CARGO_PKG_VERSION"));

/// `owner/repo` coordinates of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl FromStr for RepoRef {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self::new(owner, repo))
            }
            _ => Err(NotesError::Config(format!(
                "Invalid repository '{s}': expected the form owner/repo"
            ))),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Which release to look up; `latest` is reserved for the newest release.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReleaseTag {
    #[default]
    Latest,
    Tag(String),
}

impl ReleaseTag {
    /// Parses a tag name, treating empty input and `latest` as [`ReleaseTag::Latest`].
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" | "latest" => Self::Latest,
            tag => Self::Tag(tag.to_string()),
        }
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// The parts of a GitHub release that are used here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Release {
    /// The release body, or an empty string when the release has none.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Looks up releases on a source-control host.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn fetch_release(&self, repo: &RepoRef, tag: &ReleaseTag) -> Result<Release>;
}

/// GitHub REST API release lookup.
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// The lookup URL; owner, repo and tag are each encoded as one path segment.
    pub fn release_url(&self, repo: &RepoRef, tag: &ReleaseTag) -> Result<Url> {
        let invalid = || NotesError::Config(format!("Invalid GitHub API URL: {}", self.api_url));

        let mut url = Url::parse(self.api_url.trim_end_matches('/')).map_err(|_| invalid())?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| invalid())?;
            segments.pop_if_empty().extend([
                "repos",
                repo.owner.as_str(),
                repo.repo.as_str(),
                "releases",
            ]);
            match tag {
                ReleaseTag::Latest => segments.push("latest"),
                ReleaseTag::Tag(name) => segments.push("tags").push(name),
            };
        }
        Ok(url)
    }
}

#[async_trait]
impl ReleaseSource for GitHubClient {
    async fn fetch_release(&self, repo: &RepoRef, tag: &ReleaseTag) -> Result<Release> {
        let url = self.release_url(repo, tag)?;
        log::info!("Fetching release '{tag}' of {repo}");

        let mut request = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NotesError::Fetch(format!("Failed to connect to {url}: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NotesError::Fetch(format!(
                "Release lookup for '{tag}' in {repo} failed with status {status}: {body}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NotesError::Fetch(format!("Failed to read release response: {e}")))?;

        serde_json::from_str(&body)
            .map_err(|e| NotesError::Fetch(format!("Failed to parse release response: {e}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_ref_parse() {
        let repo: RepoRef = "acme/app".parse().unwrap();
        assert_eq!(repo, RepoRef::new("acme", "app"));
        assert_eq!(repo.to_string(), "acme/app");
    }

    #[test]
    fn test_repo_ref_parse_invalid() {
        for input in ["acme", "/app", "acme/", "a/b/c", ""] {
            let err = input.parse::<RepoRef>().unwrap_err();
            assert!(matches!(err, NotesError::Config(_)), "{input}");
        }
    }

    #[test]
    fn test_release_tag_parse() {
        assert_eq!(ReleaseTag::parse("latest"), ReleaseTag::Latest);
        assert_eq!(ReleaseTag::parse(""), ReleaseTag::Latest);
        assert_eq!(
            ReleaseTag::parse(" v1.2.0 "),
            ReleaseTag::Tag("v1.2.0".to_string())
        );
    }

    #[test]
    fn test_release_url() {
        let client = GitHubClient::new("https://api.github.com/", None);
        let repo = RepoRef::new("acme", "app");

        assert_eq!(
            client.release_url(&repo, &ReleaseTag::Latest).unwrap().as_str(),
            "https://api.github.com/repos/acme/app/releases/latest"
        );
        assert_eq!(
            client
                .release_url(&repo, &ReleaseTag::Tag("v1.2.0".to_string()))
                .unwrap()
                .as_str(),
            "https://api.github.com/repos/acme/app/releases/tags/v1.2.0"
        );
    }

    #[test]
    fn test_release_url_encodes_tag_as_one_segment() {
        let client = GitHubClient::new(DEFAULT_API_URL, None);
        let repo = RepoRef::new("acme", "app");

        let url = client
            .release_url(&repo, &ReleaseTag::Tag("v1.0#beta".to_string()))
            .unwrap();
        assert_eq!(url.path(), "/repos/acme/app/releases/tags/v1.0%23beta");
        assert!(url.fragment().is_none());

        let url = client
            .release_url(&repo, &ReleaseTag::Tag("v1.0?rc".to_string()))
            .unwrap();
        assert_eq!(url.path(), "/repos/acme/app/releases/tags/v1.0%3Frc");
        assert!(url.query().is_none());

        let url = client
            .release_url(&repo, &ReleaseTag::Tag("release/2.0".to_string()))
            .unwrap();
        assert_eq!(url.path(), "/repos/acme/app/releases/tags/release%2F2.0");
    }

    #[test]
    fn test_release_url_keeps_enterprise_base_path() {
        let client = GitHubClient::new("https://github.example.com/api/v3/", None);
        let url = client
            .release_url(&RepoRef::new("acme", "app"), &ReleaseTag::Latest)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://github.example.com/api/v3/repos/acme/app/releases/latest"
        );
    }

    #[test]
    fn test_release_url_rejects_invalid_base() {
        let client = GitHubClient::new("not a url", None);
        let err = client
            .release_url(&RepoRef::new("acme", "app"), &ReleaseTag::Latest)
            .unwrap_err();
        assert!(matches!(err, NotesError::Config(_)));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client = GitHubClient::new(DEFAULT_API_URL, Some(String::new()));
        assert!(client.token.is_none());
    }

    #[test]
    fn test_release_deserialize_null_body() {
        let release: Release =
            serde_json::from_str(r#"{"tag_name":"v1.2.0","body":null,"draft":false}"#).unwrap();
        assert_eq!(release.tag_name, "v1.2.0");
        assert_eq!(release.body_text(), "");
    }

    #[test]
    fn test_release_deserialize_body() {
        let release: Release = serde_json::from_str(
            r###"{"tag_name":"v1.2.0","name":"1.2.0","body":"## What's Changed\n* Fix crash"}"###,
        )
        .unwrap();
        assert_eq!(release.body_text(), "## What's Changed\n* Fix crash");
        assert_eq!(release.name.as_deref(), Some("1.2.0"));
    }
}
