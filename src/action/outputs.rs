use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::notes::{LanguageCode, ReleaseNotes, join_codes};

const DELIMITER_BASE: &str = "STORENOTES_OUTPUT";

/// Formats one output in the runner's file command syntax.
///
/// Single-line values use `name=value`; anything with a newline uses a
/// heredoc delimiter that does not occur in the value.
pub fn format_output(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{name}={value}\n");
    }

    let mut delimiter = DELIMITER_BASE.to_string();
    let mut attempt = 0u32;
    while value.contains(&delimiter) {
        attempt += 1;
        delimiter = format!("{DELIMITER_BASE}_{attempt}");
    }

    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Every output published for a successful run, in publishing order.
pub fn collect_outputs(notes: &ReleaseNotes, languages: &[LanguageCode]) -> Vec<(String, String)> {
    let mut outputs: Vec<(String, String)> = notes
        .iter()
        .map(|(code, text)| (format!("{code}_release_notes"), text.to_string()))
        .collect();

    outputs.push(("release_notes_json".to_string(), notes.to_json()));
    outputs.push(("languages".to_string(), join_codes(languages)));
    outputs
}

/// Appends all outputs to the file named by `GITHUB_OUTPUT`.
pub fn write_outputs(path: &Path, outputs: &[(String, String)]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file: {}", path.display()))?;

    for (name, value) in outputs {
        file.write_all(format_output(name, value).as_bytes())
            .with_context(|| format!("Failed to write output '{name}'"))?;
    }

    Ok(())
}
