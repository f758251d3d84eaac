//! Wordle Unlimited
//!
//! A Wordle game engine: guess evaluation, a six-row board driven by a small
//! input state machine, shareable result strings and challenge links.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_unlimited::core::{Feedback, Word};
//!
//! let guess = Word::new("llama").unwrap();
//! let target = Word::new("allow").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.to_emoji(), "🟨🟩🟨🟥🟥");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Challenge tokens and links
pub mod challenge;

// Game state and input handling
pub mod game;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
