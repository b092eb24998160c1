//! QuoteDeck - terminal testimonial deck viewer and WCAG contrast checker.
//!
//! With a deck file argument the application opens the interactive carousel
//! viewer; the `contrast` and `deck` subcommands provide headless access to
//! the same core for scripts and CI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use quotedeck::cli::{ContrastArgs, DeckArgs};
use quotedeck::constants::APP_BINARY_NAME;
use quotedeck::tui;
use std::path::PathBuf;

/// QuoteDeck - terminal testimonial deck viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a testimonial deck JSON file (opens the viewer)
    #[arg(value_name = "FILE")]
    deck_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check WCAG 2.1 contrast ratios for color pairs
    Contrast(ContrastArgs),
    /// Inspect a deck file and its pagination
    Deck(DeckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Contrast(args)) => run_command(|| args.execute()),
        Some(Commands::Deck(args)) => run_command(|| args.execute()),
        None => {
            let Some(path) = cli.deck_path else {
                eprintln!("No deck file given.");
                eprintln!();
                eprintln!("Usage:");
                eprintln!("  {APP_BINARY_NAME} testimonials.json");
                eprintln!("  {APP_BINARY_NAME} contrast --fg '#ffffff' --bg '#050810'");
                eprintln!("  {APP_BINARY_NAME} deck --file testimonials.json");
                eprintln!();
                eprintln!("For more options, run:");
                eprintln!("  {APP_BINARY_NAME} --help");
                std::process::exit(2);
            };

            if !path.exists() {
                eprintln!("Error: Deck file not found: {}", path.display());
                std::process::exit(1);
            }

            tui::run(&path)
        }
    }
}

/// Runs a CLI command and exits with its error code on failure.
fn run_command(f: impl FnOnce() -> quotedeck::cli::CliResult<()>) -> Result<()> {
    if let Err(err) = f() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}
