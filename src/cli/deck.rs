//! Deck inspection command: headless access to the pager.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::Deck;
use crate::pager::Pager;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Inspect a deck file and its pagination at a given viewport width
#[derive(Debug, Clone, Args)]
pub struct DeckArgs {
    /// Path to deck JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Viewport width in terminal columns used to pick cards per page
    #[arg(short, long, value_name = "COLS", default_value_t = 100)]
    pub width: u16,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DeckSummary {
    title: Option<String>,
    items: usize,
    items_per_page: usize,
    page_count: usize,
    pages: Vec<PageSummary>,
}

#[derive(Debug, Serialize)]
struct PageSummary {
    page: usize,
    authors: Vec<String>,
}

impl DeckArgs {
    /// Execute the deck command
    pub fn execute(&self) -> CliResult<()> {
        let deck = Deck::load(&self.file).map_err(|e| CliError::io(format!("{e:#}")))?;

        let config = Config::load().unwrap_or_default();
        let mut pager = Pager::with_breakpoints(
            deck.testimonials.clone(),
            config.deck.breakpoint_map(),
        );
        pager.on_viewport_change(self.width);

        let page_count = pager.page_count();
        let mut pages = Vec::with_capacity(page_count);
        for page in 0..page_count {
            pager.go_to_page(page);
            pages.push(PageSummary {
                page,
                authors: pager
                    .visible_slice()
                    .iter()
                    .map(|t| t.name.clone())
                    .collect(),
            });
        }

        let summary = DeckSummary {
            title: deck.title.clone(),
            items: deck.len(),
            items_per_page: pager.items_per_page(),
            page_count,
            pages,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if let Some(title) = &summary.title {
                println!("Deck:           {title}");
            }
            println!("Testimonials:   {}", summary.items);
            println!("Cards per page: {} (at {} columns)", summary.items_per_page, self.width);
            println!("Pages:          {}", summary.page_count);
            for page in &summary.pages {
                println!("  Page {}: {}", page.page + 1, page.authors.join(", "));
            }
        }

        Ok(())
    }
}
