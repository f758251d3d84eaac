//! Runtime settings shared by the CLI front ends

use crate::dictionary::{Dictionary, DictionaryError};
use crate::output::DEFAULT_TITLE;
use std::path::PathBuf;

/// Default base for challenge links
pub const DEFAULT_BASE_URL: &str = "https://wordle.local/";

/// Where the word lists come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// Lists compiled into the binary
    Embedded,
    /// One newline-separated file used for both guesses and targets
    File(PathBuf),
}

impl WordlistSource {
    /// Parse the `--wordlist` flag: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Build the dictionary
    ///
    /// # Errors
    ///
    /// Propagates `DictionaryError` from reading or validating the list.
    pub fn load(&self) -> Result<Dictionary, DictionaryError> {
        match self {
            Self::Embedded => Dictionary::embedded(),
            Self::File(path) => Dictionary::from_file(path),
        }
    }
}

/// Presentation settings for a play session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Title in the result header
    pub title: String,
    /// Base URL challenge links are built on
    pub base_url: String,
    /// Challenge token for the first game
    pub challenge: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            challenge: None,
        }
    }
}
