//! # Input — puzzle file readers
//!
//! Every puzzle reads a small text file. Multi-line puzzles want the
//! non-blank lines in file order, single-line puzzles want one string with
//! all whitespace stripped out.
//!
//! ```rust
//! use aoc2015::input::{chars_from_str, lines_from_str};
//!
//! assert_eq!(lines_from_str("a\n\n  \nb\r\n"), vec!["a", "b"]);
//! assert_eq!(chars_from_str("(( )\n)"), "(())");
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a puzzle input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be opened or read
    #[error("cannot read input {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads `path` and returns its non-blank lines in order.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let text = read_text(path.as_ref())?;
    Ok(lines_from_str(&text))
}

/// Reads `path` and returns every non-whitespace character as one string.
pub fn read_chars(path: impl AsRef<Path>) -> Result<String, InputError> {
    let text = read_text(path.as_ref())?;
    Ok(chars_from_str(&text))
}

/// Splits `text` into lines, dropping lines that are empty or whitespace only.
///
/// A trailing `\r` is removed so files with Windows line endings parse the
/// same way.
pub fn lines_from_str(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn chars_from_str(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn read_text(path: &Path) -> Result<String, InputError> {
    log::debug!("reading input {}", path.display());
    fs::read_to_string(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn blank_and_whitespace_lines_are_dropped() {
        let lines = lines_from_str("Hello\n\n \t \nWorld\n!!!\n\n");
        assert_eq!(lines, vec!["Hello", "World", "!!!"]);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let lines = lines_from_str("  x AND y -> d  \r\n");
        assert_eq!(lines, vec!["  x AND y -> d  "]);
    }

    #[test]
    fn chars_strip_every_whitespace_kind() {
        assert_eq!(
            chars_from_str("Hello World!!!\nThere is\ta tab here\r\n"),
            "HelloWorld!!!Thereisatabhere"
        );
    }

    #[test]
    fn reads_files_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "123 -> x\n\n456 -> y\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["123 -> x", "456 -> y"]);
        assert_eq!(read_chars(&path).unwrap(), "123->x456->y");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = read_lines(&path).unwrap_err();
        assert!(matches!(err, InputError::Open { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}
