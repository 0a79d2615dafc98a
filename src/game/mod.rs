//! Round engine, lifecycle, and status narration

mod narrative;
mod round;
mod session;

pub use narrative::{Narrative, WarningTextProvider, banner_text, classify};
pub use round::Round;
pub use session::Session;
