//! Challenge link commands

use crate::challenge::{DecodeError, challenge_link, encode, resolve, token_from_query};
use crate::core::{Word, WordError};
use crate::dictionary::Dictionary;

/// A generated challenge
pub struct ChallengeInfo {
    pub word: String,
    pub token: String,
    pub link: String,
}

/// Build the token and link for `word`
///
/// # Errors
///
/// Returns `WordError` if `word` is not 5 ASCII letters.
pub fn make_challenge(word: &str, base_url: &str) -> Result<ChallengeInfo, WordError> {
    let word = Word::new(word)?;
    Ok(ChallengeInfo {
        token: encode(word.text()),
        link: challenge_link(base_url, word.text()),
        word: word.text().to_string(),
    })
}

/// Decode a token or full challenge link into its target word
///
/// A blank token yields `Ok(None)`.
///
/// # Errors
///
/// Returns `DecodeError` if the token is malformed or names a word outside the
/// target list.
pub fn decode_challenge(input: &str, dictionary: &Dictionary) -> Result<Option<Word>, DecodeError> {
    let token = token_from_query(input).unwrap_or(input);
    resolve(Some(token), dictionary)
}
