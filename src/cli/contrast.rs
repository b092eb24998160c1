//! WCAG contrast check command.

use crate::cli::common::{CliError, CliResult};
use crate::contrast::report::{self, ColorPair, PairReport};
use crate::contrast::AA_NORMAL;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Check WCAG 2.1 contrast ratios for color pairs
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground hex color (e.g., "#ffffff"); requires --bg
    #[arg(long, value_name = "COLOR", requires = "bg")]
    pub fg: Option<String>,

    /// Background hex color (e.g., "#050810"); requires --fg
    #[arg(long, value_name = "COLOR", requires = "fg")]
    pub bg: Option<String>,

    /// JSON file with named color pairs to check
    #[arg(long, value_name = "FILE", conflicts_with_all = ["fg", "bg", "builtin"])]
    pub pairs: Option<PathBuf>,

    /// Check the built-in portfolio palette
    #[arg(long, conflicts_with_all = ["fg", "bg"])]
    pub builtin: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero if any pair fails AA normal text (4.5:1)
    #[arg(long)]
    pub strict: bool,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let pairs = self.collect_pairs()?;

        let reports = report::evaluate_pairs(&pairs).map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&reports)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print!("{}", report::format_terminal(&reports));
        }

        if self.strict {
            let failures: Vec<&PairReport> = reports
                .iter()
                .filter(|r| r.result.ratio < AA_NORMAL)
                .collect();
            if !failures.is_empty() {
                return Err(CliError::validation(format!(
                    "{} pair(s) fail AA normal text",
                    failures.len()
                )));
            }
        }

        Ok(())
    }

    /// Builds the pair list from whichever input mode was selected.
    fn collect_pairs(&self) -> CliResult<Vec<ColorPair>> {
        if let (Some(fg), Some(bg)) = (&self.fg, &self.bg) {
            return Ok(vec![ColorPair {
                name: format!("{fg} on {bg}"),
                foreground: fg.clone(),
                background: bg.clone(),
                usage: None,
            }]);
        }

        if let Some(path) = &self.pairs {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("Failed to read pairs file: {e}")))?;
            let pairs: Vec<ColorPair> = serde_json::from_str(&content)
                .map_err(|e| CliError::io(format!("Failed to parse pairs file: {e}")))?;
            if pairs.is_empty() {
                return Err(CliError::validation("Pairs file contains no color pairs"));
            }
            return Ok(pairs);
        }

        if self.builtin {
            return Ok(report::builtin_pairs());
        }

        Err(CliError::usage(
            "Nothing to check: pass --fg/--bg, --pairs <FILE>, or --builtin",
        ))
    }
}
