//! CLI command handlers for quotedeck.
//!
//! This module provides headless, scriptable access to quotedeck's core
//! functionality for automation, testing, and CI integration.

pub mod common;
pub mod contrast;
pub mod deck;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use contrast::ContrastArgs;
pub use deck::DeckArgs;
