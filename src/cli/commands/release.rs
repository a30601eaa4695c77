use anyhow::Result;

use super::generate::resolve_options;
use super::report::{self, ReportOptions};
use crate::cli::GenerationArgs;
use crate::completion::OpenAiClient;
use crate::config::{ConfigManager, resolve_config};
use crate::github::{GitHubClient, ReleaseTag, RepoRef};
use crate::notes::{NotesSource, ReleaseNotesGenerator};
use crate::ui::Spinner;

pub struct ReleaseCommand {
    pub repo: String,
    pub tag: String,
    pub token: Option<String>,
    pub generation: GenerationArgs,
}

/// Fetches a GitHub release and generates store notes from its body.
pub async fn run_release(command: ReleaseCommand) -> Result<()> {
    let repo: RepoRef = command.repo.parse()?;
    let tag = ReleaseTag::parse(&command.tag);

    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();
    let config = resolve_config(&resolve_options(&command.generation), &file_config)?;

    let token = command.token.or_else(|| file_config.github.token());
    let releases = GitHubClient::new(file_config.github.api_url(), token);
    let client = OpenAiClient::new(config.completion_settings())?;

    log::info!("Generating notes for {repo} at {tag}");

    let outcome = {
        let _spinner = Spinner::new(&format!("Generating release notes for {repo}..."));
        ReleaseNotesGenerator::new(client)
            .run(
                NotesSource::Release { repo, tag },
                config.generate_options(),
                Some(&releases),
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
