//! Testimonial deck data model and JSON loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single testimonial card.
///
/// The pager itself is agnostic to item structure; this is the shape deck
/// files ship and the deck viewer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Full quote text (cards show a truncated preview, the detail overlay
    /// shows everything)
    pub quote: String,
    /// Author name
    pub name: String,
    /// Author title or role
    pub title: String,
    /// Path or URL of the author image (unused in the terminal, kept for
    /// interchange with web exports)
    #[serde(default)]
    pub image: String,
    /// Alt text for the author image
    #[serde(default)]
    pub alt: String,
}

/// An ordered collection of testimonials loaded from a deck file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Optional display title for the deck
    #[serde(default)]
    pub title: Option<String>,
    /// Cards in display order
    pub testimonials: Vec<Testimonial>,
}

impl Deck {
    /// Loads a deck from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails [`Deck::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read deck file: {}", path.display()))?;

        let deck: Self = serde_json::from_str(&content)
            .context(format!("Failed to parse deck file: {}", path.display()))?;

        deck.validate()?;
        Ok(deck)
    }

    /// Validates the deck contents.
    ///
    /// An empty deck is a valid, degenerate state; cards with an empty quote
    /// or author name are not.
    pub fn validate(&self) -> Result<()> {
        for (idx, t) in self.testimonials.iter().enumerate() {
            if t.quote.trim().is_empty() {
                anyhow::bail!("Testimonial {} has an empty quote", idx + 1);
            }
            if t.name.trim().is_empty() {
                anyhow::bail!("Testimonial {} has an empty author name", idx + 1);
            }
        }
        Ok(())
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.testimonials.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.testimonials.is_empty()
    }
}
