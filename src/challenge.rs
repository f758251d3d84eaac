//! Challenge links
//!
//! A challenge token is the base64 encoding of a lowercase target word, carried
//! in the `challenge` query parameter of a shareable link. Tokens are accepted
//! in both the URL-safe unpadded form this module produces and the standard
//! padded alphabet older links used.

use crate::core::Word;
use crate::dictionary::Dictionary;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use log::{debug, warn};
use rand::Rng;
use thiserror::Error;

/// Query parameter carrying the token
pub const QUERY_PARAM: &str = "challenge";

/// Reasons a challenge token cannot be trusted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Challenge token is not valid base64 text")]
    Malformed,
    #[error("Challenge word '{0}' is not in the target list")]
    UnknownWord(String),
}

/// Encode a word into a URL-safe token
///
/// No validation is performed; any text round-trips.
///
/// # Examples
/// ```
/// use wordle_unlimited::challenge::{decode, encode};
///
/// let token = encode("CRANE");
/// assert_eq!(decode(&token).unwrap(), "crane");
/// ```
#[must_use]
pub fn encode(word: &str) -> String {
    URL_SAFE_NO_PAD.encode(word.to_lowercase())
}

/// Decode a token back into its word
///
/// # Errors
///
/// Returns `DecodeError::Malformed` if the token is not base64 or does not
/// decode to UTF-8 text.
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let normalized: String = strip_padding(token.trim())
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD
        .decode(normalized)
        .map_err(|_| DecodeError::Malformed)?;
    String::from_utf8(bytes).map_err(|_| DecodeError::Malformed)
}

/// Drop trailing `=` padding, including percent-encoded `%3D` copied from an
/// address bar
fn strip_padding(mut token: &str) -> &str {
    loop {
        if let Some(rest) = token.strip_suffix('=') {
            token = rest;
        } else if let Some(rest) = token
            .strip_suffix("%3D")
            .or_else(|| token.strip_suffix("%3d"))
        {
            token = rest;
        } else {
            return token;
        }
    }
}

/// Decode a token and check it names a playable target
///
/// An absent or blank token means "no challenge" and yields `Ok(None)`.
///
/// # Errors
///
/// Returns `DecodeError::Malformed` for undecodable tokens and
/// `DecodeError::UnknownWord` when the decoded text is not in the target list.
pub fn resolve(token: Option<&str>, dictionary: &Dictionary) -> Result<Option<Word>, DecodeError> {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let text = decode(token)?;
    let word = Word::new(&text).map_err(|_| DecodeError::UnknownWord(text.clone()))?;
    if !dictionary.is_target(&word) {
        return Err(DecodeError::UnknownWord(text));
    }

    debug!("Resolved challenge token to a valid target");
    Ok(Some(word))
}

/// Target for a new game: the challenged word if the token checks out,
/// otherwise a random pick
pub fn pick_target<R: Rng + ?Sized>(
    token: Option<&str>,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Word {
    match resolve(token, dictionary) {
        Ok(Some(word)) => word,
        Ok(None) => dictionary.random_target(rng).clone(),
        Err(err) => {
            warn!("Ignoring challenge: {err}");
            dictionary.random_target(rng).clone()
        }
    }
}

/// Build a shareable link for `word`
///
/// # Examples
/// ```
/// use wordle_unlimited::challenge::challenge_link;
///
/// assert_eq!(
///     challenge_link("https://example.com/play", "crane"),
///     "https://example.com/play?challenge=Y3JhbmU"
/// );
/// ```
#[must_use]
pub fn challenge_link(base_url: &str, word: &str) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}{QUERY_PARAM}={}", encode(word))
}

/// Extract the challenge token from a query string or full link
///
/// Returns `None` when the parameter is missing.
#[must_use]
pub fn token_from_query(query: &str) -> Option<&str> {
    let query = query.split_once('?').map_or(query, |(_, q)| q);
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == QUERY_PARAM)
        .map(|(_, value)| value)
}
