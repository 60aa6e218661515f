//! Difficulty curve: streak → target equity → acceptance window.
mod difficulty;
mod window;

pub use difficulty::*;
pub use window::*;
