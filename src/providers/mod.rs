//! External collaborators: word supply, lives pool, warning texts

mod farewell;
mod lives;
mod words;

pub use farewell::FarewellTexts;
pub use lives::{Language, LivesPool};
pub use words::{RandomWordProvider, WordProvider};
