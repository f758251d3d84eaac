//! Guess scoring command
//!
//! Scores a single guess against a chosen target without playing a game.

use crate::core::{Feedback, Word, WordError};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns `WordError` if either word is not 5 ASCII letters.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(ScoreResult {
        guess: guess.text().to_string(),
        target: target.text().to_string(),
        feedback,
    })
}
