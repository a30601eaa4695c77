//! Language codes, display names, and per-language output tags.

use std::fmt;

use crate::ui::Style;

/// Languages that get a readable name in prompts and labels.
///
/// Codes are lowercase; regional variants follow the app store locale names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("en-au", "English (Australia)"),
    ("en-gb", "English (UK)"),
    ("es", "Spanish"),
    ("es-mx", "Spanish (Mexico)"),
    ("et", "Estonian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fr-ca", "French (Canada)"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("ms", "Malay"),
    ("nb", "Norwegian Bokmål"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pt-br", "Portuguese (Brazil)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
];

/// Languages used when the caller does not ask for any.
pub const DEFAULT_LANGUAGES: &[&str] = &["en", "sv", "fr"];

/// A caller-supplied language code, trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The default `en, sv, fr` sequence.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_LANGUAGES.iter().map(|code| Self::new(code)).collect()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything the prompt builder and parser need to know about one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSpec {
    pub code: LanguageCode,
    pub name: String,
    pub open_tag: String,
    pub close_tag: String,
}

impl LanguageSpec {
    pub fn new(code: &LanguageCode) -> Self {
        let tag = format!("{code}_release_notes");
        Self {
            code: code.clone(),
            name: display_name(code.as_str()),
            open_tag: format!("<{tag}>"),
            close_tag: format!("</{tag}>"),
        }
    }

    /// `English (en)`
    pub fn description(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Returns the readable name for `code`, or the uppercased code if unknown.
pub fn display_name(code: &str) -> String {
    let normalized = code.trim().to_lowercase();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(known, _)| *known == normalized)
        .map_or_else(|| code.trim().to_uppercase(), |(_, name)| (*name).to_string())
}

/// Splits a comma-separated language list.
///
/// Empty entries are dropped; an empty result falls back to [`DEFAULT_LANGUAGES`].
pub fn parse_language_list(input: &str) -> Vec<LanguageCode> {
    let codes: Vec<LanguageCode> = input
        .split(',')
        .map(LanguageCode::new)
        .filter(|code| !code.as_str().is_empty())
        .collect();

    if codes.is_empty() {
        LanguageCode::defaults()
    } else {
        codes
    }
}

/// Joins codes back into the `en,sv,fr` form.
pub fn join_codes(languages: &[LanguageCode]) -> String {
    languages
        .iter()
        .map(LanguageCode::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Prints all known language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Known language codes"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
    println!();
    println!(
        "{}",
        Style::hint("Other codes are accepted too and shown in uppercase.")
    );
}
