//! Terminal output formatting
//!
//! Pure formatters shared by both front ends, plus colored printing for the
//! simple CLI mode.

pub mod display;
pub mod formatters;

pub use display::print_board;
pub use formatters::{KeyState, RevealState, guessed_line, key_state, reveal_line, reveal_states};
