//! Command implementations

pub mod challenge;
pub mod score;
pub mod simple;

pub use challenge::{ChallengeInfo, decode_challenge, make_challenge};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
