mod combine;
mod generator;
mod language;
mod parser;
mod prompt;
mod types;

pub use combine::combine_release_notes;
pub use generator::{GenerateOptions, GeneratedNotes, NotesSource, Outcome, ReleaseNotesGenerator};
pub use language::{
    DEFAULT_LANGUAGES, LanguageCode, LanguageSpec, SUPPORTED_LANGUAGES, display_name, join_codes,
    parse_language_list, print_languages,
};
pub use parser::parse_release_notes;
pub use prompt::{PROMPT_TEMPLATE, SYSTEM_PROMPT, build_prompt};
pub use types::{DEFAULT_MAX_LENGTH, ReleaseNotes, ReleaseNotesRequest};
