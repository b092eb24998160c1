//! Data models for colors and testimonial decks.
//!
//! Models are designed to be independent of UI and business logic.

pub mod rgb;
pub mod testimonial;

// Re-export all model types
pub use rgb::{ParseColorError, RgbColor};
pub use testimonial::{Deck, Testimonial};
