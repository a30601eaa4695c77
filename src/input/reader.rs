use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, BufRead, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Line that ends interactive notes entry.
pub const END_MARKER: &str = "EOF";

pub struct InputReader;

impl InputReader {
    /// Reads release notes from `file_path`, or all of stdin when `None`.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    /// Collects lines until one equals [`END_MARKER`] or input ends.
    ///
    /// Every collected line keeps a trailing newline.
    pub fn read_until_marker(reader: impl BufRead) -> Result<String> {
        let mut notes = String::new();

        for line in reader.lines() {
            let line = line.context("Failed to read release notes")?;
            if line.trim_end_matches('\r') == END_MARKER {
                break;
            }

            notes.push_str(&line);
            notes.push('\n');

            if notes.len() > MAX_INPUT_SIZE {
                bail!(size_error(notes.len(), "input"));
            }
        }

        Ok(notes)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(size_error(size, "file"));
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(size_error(buffer.len(), "input"));
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn size_error(size: usize, what: &str) -> String {
    format!(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
         Consider splitting the {what} into smaller parts.",
        size as f64 / 1024.0 / 1024.0
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "* Fix crash when loading images").unwrap();

        let content = InputReader::read(Some(temp_file.path().to_str().unwrap())).unwrap();
        assert_eq!(content.trim(), "* Fix crash when loading images");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read(Some("/nonexistent/path/to/notes.md"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let content = InputReader::read(Some(temp_file.path().to_str().unwrap())).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large_notes.md");
        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE + 1)).unwrap();

        let result = InputReader::read(Some(file_path.to_str().unwrap()));
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_until_marker() {
        let input = Cursor::new("## What's Changed\n* Fix crash\nEOF\nignored\n");
        let notes = InputReader::read_until_marker(input).unwrap();
        assert_eq!(notes, "## What's Changed\n* Fix crash\n");
    }

    #[test]
    fn test_read_until_marker_handles_crlf() {
        let input = Cursor::new("* Dark mode\r\nEOF\r\n");
        let notes = InputReader::read_until_marker(input).unwrap();
        assert_eq!(notes, "* Dark mode\n");
    }

    #[test]
    fn test_read_until_marker_only_whole_line() {
        let input = Cursor::new("Fixed EOF handling\nEOF\n");
        let notes = InputReader::read_until_marker(input).unwrap();
        assert_eq!(notes, "Fixed EOF handling\n");
    }

    #[test]
    fn test_read_until_marker_without_marker_reads_all() {
        let input = Cursor::new("line one\nline two");
        let notes = InputReader::read_until_marker(input).unwrap();
        assert_eq!(notes, "line one\nline two\n");
    }

    #[test]
    fn test_read_until_marker_immediate_marker() {
        let notes = InputReader::read_until_marker(Cursor::new("EOF\n")).unwrap();
        assert!(notes.is_empty());
    }
}
