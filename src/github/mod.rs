mod release;

pub use release::{DEFAULT_API_URL, GitHubClient, Release, ReleaseSource, ReleaseTag, RepoRef};
