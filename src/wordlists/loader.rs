//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines, `#`
/// comments and any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use daily_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    Ok(words_from_slice(&lines))
}

/// Convert a string slice to a Word vector
///
/// Entries that are not valid words are logged and skipped.
///
/// # Examples
/// ```
/// use daily_wordle::wordlists::loader::words_from_slice;
/// use daily_wordle::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| match Word::new(s) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(word = s, error = %e, "skipping invalid candidate");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["reacts", "FRAMES", "Mobile"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "REACTS");
        assert_eq!(words[1].text(), "FRAMES");
        assert_eq!(words[2].text(), "MOBILE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["REACTS", "ZUSTAND", "TEMPLATE", "MOBILE"];
        let words = words_from_slice(input);

        // Only the six-letter entries survive
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "REACTS");
        assert_eq!(words[1].text(), "MOBILE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "planet").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  garden  ").unwrap();
        writeln!(file, "toolongword").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "PLANET");
        assert_eq!(words[1].text(), "GARDEN");
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
