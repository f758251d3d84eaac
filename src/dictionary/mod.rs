//! Word lists for the game
//!
//! A `Dictionary` holds the set of accepted guesses and the list of words the
//! secret target is drawn from. It is built once and never mutated.

pub mod loader;

mod embedded {
    // Generated by build.rs from data/*.txt
    include!(concat!(env!("OUT_DIR"), "/answers.rs"));
    include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
}

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Word list contains no valid 5-letter words")]
    Empty,
    #[error("Target list contains no valid 5-letter words")]
    NoTargets,
    #[error("Failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Accepted guesses plus eligible targets
#[derive(Debug, Clone)]
pub struct Dictionary {
    guesses: FxHashSet<String>,
    targets: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from guess and target words
    ///
    /// Targets are always accepted as guesses, so the guess set is the union
    /// of both inputs.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::NoTargets` if `targets` is empty, which would
    /// leave nothing to draw a secret word from.
    pub fn new(
        guesses: impl IntoIterator<Item = Word>,
        targets: impl IntoIterator<Item = Word>,
    ) -> Result<Self, DictionaryError> {
        let mut targets: Vec<Word> = targets.into_iter().collect();
        if targets.is_empty() {
            return Err(DictionaryError::NoTargets);
        }
        targets.sort_by(|a, b| a.text().cmp(b.text()));
        targets.dedup();

        let guesses: FxHashSet<String> = guesses
            .into_iter()
            .chain(targets.iter().cloned())
            .map(|word| word.text().to_string())
            .collect();

        Ok(Self { guesses, targets })
    }

    /// Dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        let dictionary = Self::new(
            loader::words_from_slice(ALLOWED),
            loader::words_from_slice(ANSWERS),
        )?;
        info!(
            "Loaded embedded dictionary: {} guesses, {} targets",
            dictionary.len(),
            dictionary.targets.len()
        );
        Ok(dictionary)
    }

    /// Load a single list from disk that serves as both guesses and targets
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read and
    /// `DictionaryError::Empty` if it holds no usable words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let words = loader::load_from_file(path.as_ref())?;
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        let dictionary = Self::new(Vec::new(), words)?;
        info!(
            "Loaded dictionary from {}: {} words",
            path.as_ref().display(),
            dictionary.len()
        );
        Ok(dictionary)
    }

    /// Check whether `word` is an accepted guess, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.guesses.contains(&word.to_ascii_lowercase())
    }

    /// Check whether `word` may be used as the secret target
    #[must_use]
    pub fn is_target(&self, word: &Word) -> bool {
        self.targets.contains(word)
    }

    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Pick a target uniformly at random
    ///
    /// # Panics
    /// Will not panic - construction guarantees at least one target.
    pub fn random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.targets
            .choose(rng)
            .expect("target list validated non-empty")
    }
}
