//! Serving-time scenario selection.
//!
//! [`Selector`] turns a streak into a [`Presentation`]: draw a stage from
//! [`Weights`], sample a scenario in the difficulty window, fall back to any
//! scenario of a freshly drawn stage, then randomize which hand is shown first.
mod presentation;
mod selector;
mod weights;

pub use presentation::*;
pub use selector::*;
pub use weights::*;
