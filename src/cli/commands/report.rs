//! Printing and saving generated notes.

use anyhow::Result;

use crate::fs::atomic_write;
use crate::notes::{GeneratedNotes, Outcome, combine_release_notes};
use crate::status;
use crate::ui::Style;

/// How a finished run is presented.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub json: bool,
    pub output: Option<String>,
}

/// Prints the outcome and turns a failure into an error for `main`.
pub fn finish(outcome: Outcome, options: &ReportOptions) -> Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcome.to_json())?);
    }

    match outcome {
        Outcome::Success(generated) => {
            if !options.json {
                print_sections(&generated);
            }
            if let Some(path) = &options.output {
                save_combined(&generated, path)?;
            }
            Ok(())
        }
        Outcome::Failure(e) => Err(e.into()),
    }
}

/// Prints one block per language, in request order.
pub fn print_sections(generated: &GeneratedNotes) {
    for (code, text) in generated.release_notes.iter() {
        println!();
        println!(
            "{}",
            Style::header(format!(
                "=== {} Release Notes ===",
                code.as_str().to_uppercase()
            ))
        );
        if text.is_empty() {
            println!(
                "{}",
                Style::hint("No notes generated for this language.")
            );
        } else {
            println!("{text}");
        }
    }
}

/// Writes the combined document to `path`.
pub fn save_combined(generated: &GeneratedNotes, path: &str) -> Result<()> {
    let combined = combine_release_notes(&generated.release_notes, &generated.languages);
    atomic_write(path, &combined)?;
    status!(
        "{} Release notes saved to {}",
        Style::success("✓"),
        Style::secondary(path)
    );
    Ok(())
}
