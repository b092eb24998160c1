//! Testimonial deck viewer library.
//!
//! This library provides core functionality for the QuoteDeck application:
//! WCAG 2.1 contrast evaluation, carousel pagination over testimonial
//! decks, and the terminal UI that presents them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod contrast;
pub mod flags;
pub mod models;
pub mod pager;
pub mod tui;
