//! Assembly: Endgame
//!
//! A single-round word-guessing game for the terminal: the hidden word is
//! revealed letter by letter, and every wrong guess costs the programming
//! world one language. Lose them all and only Assembly remains.
//!
//! # Quick Start
//!
//! ```rust
//! use endgame::core::Word;
//! use endgame::game::Round;
//!
//! let mut round = Round::new(Word::new("cat").unwrap(), 8);
//! round.submit('c');
//! round.submit('x');
//!
//! let outcome = round.outcome();
//! assert_eq!(outcome.wrong_guesses, 1);
//! assert!(!outcome.is_over);
//! ```

// Core domain types
pub mod core;

// Round engine, lifecycle, and narration
pub mod game;

// External collaborators: words, lives, warning texts
pub mod providers;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
