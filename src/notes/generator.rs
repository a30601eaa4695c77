//! The generation pipeline: prompt, completion, parse.

use serde_json::{Value, json};

use super::language::LanguageCode;
use super::parser::parse_release_notes;
use super::prompt::build_prompt;
use super::types::{ReleaseNotes, ReleaseNotesRequest};
use crate::completion::CompletionModel;
use crate::error::{NotesError, Result};
use crate::github::{Release, ReleaseSource, ReleaseTag, RepoRef};

/// Where the original notes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesSource {
    /// Notes supplied directly by the caller.
    Text(String),
    /// Notes taken from a release body.
    Release { repo: RepoRef, tag: ReleaseTag },
}

/// Length budget and languages for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub max_length: u32,
    pub languages: Vec<LanguageCode>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        let defaults = ReleaseNotesRequest::new("");
        Self {
            max_length: defaults.max_length,
            languages: defaults.languages,
        }
    }
}

/// A successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNotes {
    pub release_notes: ReleaseNotes,
    pub original_release_notes: String,
    pub languages: Vec<LanguageCode>,
    /// The fetched release, in fetch mode.
    pub release: Option<Release>,
}

/// Result envelope of [`ReleaseNotesGenerator::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(GeneratedNotes),
    /// Serialized with the bare error message.
    Failure(NotesError),
}

impl Outcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn error(&self) -> Option<&NotesError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e),
        }
    }

    /// The envelope as JSON, e.g. `{"success": false, "error": "..."}`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success(generated) => {
                let mut value = json!({
                    "success": true,
                    "releaseNotes": generated.release_notes,
                    "originalReleaseNotes": generated.original_release_notes,
                    "languages": generated
                        .languages
                        .iter()
                        .map(LanguageCode::as_str)
                        .collect::<Vec<_>>(),
                });
                if let Some(release) = &generated.release {
                    value["release"] = json!(release);
                }
                value
            }
            Self::Failure(e) => json!({ "success": false, "error": e.to_string() }),
        }
    }
}

/// Turns technical notes into per-language store notes with one model call.
pub struct ReleaseNotesGenerator<M> {
    model: M,
}

impl<M: CompletionModel> ReleaseNotesGenerator<M> {
    pub const fn new(model: M) -> Self {
        Self { model }
    }

    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Builds the prompt, calls the model once and parses its answer.
    pub async fn generate(&self, request: &ReleaseNotesRequest) -> Result<ReleaseNotes> {
        let prompt = build_prompt(
            &request.original_text,
            request.max_length,
            &request.languages,
        );
        log::debug!(
            "Built prompt of {} chars for languages [{}]",
            prompt.len(),
            super::language::join_codes(&request.languages)
        );

        let raw = self.model.complete(&prompt).await?;
        log::debug!("Model returned {} chars", raw.len());

        Ok(parse_release_notes(&raw, &request.languages))
    }

    /// Runs the whole workflow and reports failures in the envelope.
    ///
    /// `fetcher` is required for [`NotesSource::Release`].
    pub async fn run(
        &self,
        source: NotesSource,
        options: GenerateOptions,
        fetcher: Option<&dyn ReleaseSource>,
    ) -> Outcome {
        match self.try_run(source, options, fetcher).await {
            Ok(generated) => Outcome::Success(generated),
            Err(e) => {
                log::warn!("Generation failed ({}): {e}", e.kind());
                Outcome::Failure(e)
            }
        }
    }

    async fn try_run(
        &self,
        source: NotesSource,
        options: GenerateOptions,
        fetcher: Option<&dyn ReleaseSource>,
    ) -> Result<GeneratedNotes> {
        let (original_text, release) = match source {
            NotesSource::Text(text) => (text, None),
            NotesSource::Release { repo, tag } => {
                let fetcher = fetcher.ok_or_else(|| {
                    NotesError::Config("No release source configured for release lookup".into())
                })?;
                let release = fetcher.fetch_release(&repo, &tag).await?;
                (release.body_text().to_string(), Some(release))
            }
        };

        let request = ReleaseNotesRequest {
            original_text,
            max_length: options.max_length,
            languages: options.languages,
        };
        let release_notes = self.generate(&request).await?;

        Ok(GeneratedNotes {
            release_notes,
            original_release_notes: request.original_text,
            languages: request.languages,
            release,
        })
    }
}
