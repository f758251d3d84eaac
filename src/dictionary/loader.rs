//! Word list loading utilities
//!
//! Turns newline-separated word lists, from disk or from the embedded
//! constants, into validated `Word`s.

use super::DictionaryError;
use crate::core::Word;
use log::debug;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Blank lines and entries that are not 5-letter words are skipped.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_unlimited::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content);
    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a newline-separated word list
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_unlimited::dictionary::loader::words_from_slice;
/// use wordle_unlimited::dictionary::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_lines_handles_blank_lines_and_case() {
        let words = words_from_lines("CRANE\n\n  slate \r\nno\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::dictionary::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
