//! Application layer managing the calculator session and shell state.
//!
//! This module coordinates between the domain layer and presentation layer:
//! it owns the input state machine that turns button events into expression
//! edits and re-evaluation, and the state the terminal shell renders from.

pub mod state;

pub use state::*;
