use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::language::LanguageCode;

pub const DEFAULT_MAX_LENGTH: u32 = 500;

/// Input for a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotesRequest {
    pub original_text: String,
    /// Advisory character budget passed to the model.
    pub max_length: u32,
    /// Controls both prompt order and result order.
    pub languages: Vec<LanguageCode>,
}

impl ReleaseNotesRequest {
    /// A request with the default length budget and `en, sv, fr`.
    pub fn new(original_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            max_length: DEFAULT_MAX_LENGTH,
            languages: LanguageCode::defaults(),
        }
    }

    #[must_use]
    pub const fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: Vec<LanguageCode>) -> Self {
        self.languages = languages;
        self
    }
}

/// Translated notes keyed by language code, in request order.
///
/// Inserting a code twice overwrites the text but keeps the first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseNotes {
    entries: Vec<(LanguageCode, String)>,
}

impl ReleaseNotes {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, code: LanguageCode, text: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(known, _)| *known == code) {
            entry.1 = text;
        } else {
            self.entries.push((code, text));
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        let code = LanguageCode::new(code);
        self.entries
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, text)| text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &str)> {
        self.entries.iter().map(|(code, text)| (code, text.as_str()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &LanguageCode> {
        self.entries.iter().map(|(code, _)| code)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object text with keys in request order.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for ReleaseNotes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, text) in &self.entries {
            map.serialize_entry(code.as_str(), text)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = ReleaseNotesRequest::new("notes");
        assert_eq!(request.max_length, 500);
        assert_eq!(request.languages, LanguageCode::defaults());
    }

    #[test]
    fn test_request_builders() {
        let request = ReleaseNotesRequest::new("notes")
            .with_max_length(120)
            .with_languages(vec!["de".into()]);
        assert_eq!(request.max_length, 120);
        assert_eq!(request.languages, vec![LanguageCode::new("de")]);
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut notes = ReleaseNotes::new();
        notes.insert("fr".into(), "Bonjour".to_string());
        notes.insert("en".into(), "Hello".to_string());

        let codes: Vec<&str> = notes.codes().map(LanguageCode::as_str).collect();
        assert_eq!(codes, ["fr", "en"]);
    }

    #[test]
    fn test_duplicate_insert_overwrites_in_place() {
        let mut notes = ReleaseNotes::new();
        notes.insert("en".into(), "first".to_string());
        notes.insert("sv".into(), "hej".to_string());
        notes.insert("en".into(), "second".to_string());

        assert_eq!(notes.len(), 2);
        assert_eq!(notes.get("en"), Some("second"));
        assert_eq!(notes.iter().next().map(|(c, _)| c.as_str()), Some("en"));
    }

    #[test]
    fn test_get_normalizes_code() {
        let mut notes = ReleaseNotes::new();
        notes.insert("sv".into(), "Hej".to_string());
        assert_eq!(notes.get("SV"), Some("Hej"));
        assert_eq!(notes.get("fr"), None);
    }

    #[test]
    fn test_json_preserves_order() {
        let mut notes = ReleaseNotes::new();
        notes.insert("sv".into(), "Hej".to_string());
        notes.insert("en".into(), String::new());
        assert_eq!(notes.to_json(), r#"{"sv":"Hej","en":""}"#);
    }
}
