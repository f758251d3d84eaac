//! Terminal output formatting
//!
//! Result strings for sharing, plus colored terminal output for the line-mode game.

pub mod display;
pub mod formatters;

pub use display::{
    print_challenge, print_score_result, write_completion, write_grid, write_keyboard,
};
pub use formatters::{DEFAULT_TITLE, game_result, result_string, share_message};
