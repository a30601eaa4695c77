//! Extraction of per-language sections from the model's tagged output.

use regex::Regex;

use super::language::{LanguageCode, LanguageSpec};
use super::types::ReleaseNotes;

/// Pulls each language's section out of `raw_text`.
///
/// Every requested code gets an entry; a code whose tag pair is missing or
/// malformed maps to an empty string.
pub fn parse_release_notes(raw_text: &str, languages: &[LanguageCode]) -> ReleaseNotes {
    let mut notes = ReleaseNotes::new();

    for code in languages {
        let text = extract_section(raw_text, &LanguageSpec::new(code)).unwrap_or_default();
        if text.is_empty() {
            log::info!("No release notes found for language '{code}'");
        }
        notes.insert(code.clone(), text);
    }

    notes
}

/// Returns the trimmed content of the first `open ... close` pair for `spec`.
fn extract_section(raw_text: &str, spec: &LanguageSpec) -> Option<String> {
    if raw_text.is_empty() {
        return None;
    }

    let pattern = section_pattern(spec)?;
    let inner = pattern.captures(raw_text)?.get(1)?.as_str();

    // An unterminated block followed by a complete one: keep the complete one.
    let opening = opening_pattern(spec)?;
    let inner = opening
        .find_iter(inner)
        .last()
        .map_or(inner, |found| &inner[found.end()..]);

    Some(inner.trim().to_string())
}

fn section_pattern(spec: &LanguageSpec) -> Option<Regex> {
    let open = regex::escape(&spec.open_tag);
    let close = regex::escape(&spec.close_tag);
    compile(&format!("(?is){open}(.*?){close}"))
}

fn opening_pattern(spec: &LanguageSpec) -> Option<Regex> {
    compile(&format!("(?i){}", regex::escape(&spec.open_tag)))
}

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .inspect_err(|e| log::warn!("Skipping unusable tag pattern {pattern:?}: {e}"))
        .ok()
}
