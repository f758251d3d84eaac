//! Game engine
//!
//! `GameState` owns one game; `InputController` is the only way user events
//! reach it.

mod input;
mod state;

pub use input::{Input, InputController, InputOutcome, InputStatus};
pub use state::{GameState, Outcome, SubmitOutcome};
