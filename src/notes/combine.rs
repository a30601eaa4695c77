use super::language::{LanguageCode, display_name};
use super::types::ReleaseNotes;

/// Joins every language's notes into one labeled document.
///
/// Sections follow `languages`; a language without text still gets its label.
pub fn combine_release_notes(notes: &ReleaseNotes, languages: &[LanguageCode]) -> String {
    languages
        .iter()
        .map(|code| {
            format!(
                "{} ({code})\n{}",
                display_name(code.as_str()),
                notes.get(code.as_str()).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
