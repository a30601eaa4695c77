//! GitHub Actions entry point: inputs from the runner, outputs to `GITHUB_OUTPUT`.

mod inputs;
mod outputs;

pub use inputs::ActionInputs;
pub use outputs::{collect_outputs, format_output, write_outputs};

use crate::completion::{CompletionSettings, OpenAiClient};
use crate::config::DEFAULT_ENDPOINT;
use crate::github::GitHubClient;
use crate::notes::{GenerateOptions, NotesSource, Outcome, ReleaseNotesGenerator};

/// Fetches the configured release and generates its store notes.
pub async fn run_action(inputs: &ActionInputs) -> Outcome {
    let settings = CompletionSettings::new(
        inputs
            .api_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        inputs.model.clone(),
    )
    .with_api_key(Some(inputs.openai_api_key.clone()));

    let client = match OpenAiClient::new(settings) {
        Ok(client) => client,
        Err(e) => return Outcome::Failure(e),
    };

    let releases = GitHubClient::new(
        inputs.github_api_url.clone(),
        Some(inputs.github_token.clone()),
    );

    ReleaseNotesGenerator::new(client)
        .run(
            NotesSource::Release {
                repo: inputs.repository.clone(),
                tag: inputs.release_tag.clone(),
            },
            GenerateOptions {
                max_length: inputs.max_length,
                languages: inputs.languages.clone(),
            },
            Some(&releases),
        )
        .await
}
