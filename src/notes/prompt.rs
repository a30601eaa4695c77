//! Prompt construction for the completion model.

use super::language::{LanguageCode, LanguageSpec};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that transforms technical release notes \
     into user-friendly app store release notes in multiple languages.";

const ORIGINAL_PLACEHOLDER: &str = "{{ORIGINAL_RELEASE_NOTES}}";
const MAX_LENGTH_PLACEHOLDER: &str = "{{MAX_LENGTH}}";
const LANGUAGES_PLACEHOLDER: &str = "{{LANGUAGES}}";
const OUTPUT_FORMAT_PLACEHOLDER: &str = "{{OUTPUT_FORMAT}}";

pub const PROMPT_TEMPLATE: &str = "\
You are an AI assistant specialized in creating user-friendly release notes for mobile apps. \
Your task is to convert technical GitHub release notes into consumer-friendly descriptions \
suitable for app stores, and then translate them into multiple languages.

First, here are the original GitHub release notes:

<original_release_notes>
{{ORIGINAL_RELEASE_NOTES}}
</original_release_notes>

And here is the maximum character length for the final release notes:

<max_length>
{{MAX_LENGTH}}
</max_length>

The release notes must be written in these languages: {{LANGUAGES}}.

Please follow these steps to create the release notes:

1. Read through the original release notes carefully.

2. Inside <release_notes_planning> tags, analyze the notes and plan your approach:
   a. List key features, improvements, and bug fixes that will be most relevant to end-users.
   b. Brainstorm user-friendly phrasing for each item.
   c. Plan the structure (bullet points vs. paragraph).
   d. Consider idiomatic expressions or culture-specific phrases for each language.
   e. Draft a sample version in the first language and count its characters to ensure it's within the limit.

3. Create the release notes in the first language, following these guidelines:
   - Remove any technical details or implementation specifics.
   - Omit very minor changes that users won't notice.
   - Focus on new features, improvements, and bug fixes that impact the user experience.
   - Keep it concise but informative.
   - Use bullet points if there are multiple changes.
   - Ensure a friendly and enthusiastic tone.
   - Stay within the specified character limit.

4. Translate the release notes into each of the remaining languages. When translating:
   - Ensure the translations feel native and idiomatic to each language.
   - Be cautious with technical terms - use the accepted term in each language rather than a literal translation.
   - Maintain the friendly and enthusiastic tone in each language.

5. Present your final output in the following format:

{{OUTPUT_FORMAT}}

Remember to check that each language version adheres to the character limit and captures \
the essence of the updates in a user-friendly manner.
";

/// Builds the user prompt for `languages`, in the given order.
///
/// The original text is substituted last so placeholder-like text inside the
/// notes is left untouched.
pub fn build_prompt(original_text: &str, max_length: u32, languages: &[LanguageCode]) -> String {
    let specs: Vec<LanguageSpec> = languages.iter().map(LanguageSpec::new).collect();

    let description = specs
        .iter()
        .map(LanguageSpec::description)
        .collect::<Vec<_>>()
        .join(", ");

    let output_format = specs
        .iter()
        .map(|spec| {
            format!(
                "{}\n[{} version here]\n{}",
                spec.open_tag, spec.name, spec.close_tag
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    PROMPT_TEMPLATE
        .replacen(OUTPUT_FORMAT_PLACEHOLDER, &output_format, 1)
        .replacen(LANGUAGES_PLACEHOLDER, &description, 1)
        .replacen(MAX_LENGTH_PLACEHOLDER, &max_length.to_string(), 1)
        .replacen(ORIGINAL_PLACEHOLDER, original_text, 1)
}
