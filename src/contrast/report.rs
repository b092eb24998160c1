//! Output formatting for contrast check results.
//!
//! Formats evaluated color pairs with:
//! - Clear visual indicators (✓/✗)
//! - The ratio to two decimal places
//! - Per-level WCAG verdicts with their thresholds
//! - A summary section when more than one pair is checked

use crate::contrast::{self, ContrastResult, WcagLevel, AAA_NORMAL, AA_NORMAL};
use crate::models::{ParseColorError, RgbColor};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A named foreground/background pair, as found in pair files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Display name for the combination
    pub name: String,
    /// Foreground hex color
    pub foreground: String,
    /// Background hex color
    pub background: String,
    /// Where the combination is used (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

/// One evaluated pair, ready for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct PairReport {
    /// Display name for the combination
    pub name: String,
    /// Foreground, normalized to lowercase hex
    pub foreground: String,
    /// Background, normalized to lowercase hex
    pub background: String,
    /// Where the combination is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Ratio and per-level verdicts
    #[serde(flatten)]
    pub result: ContrastResult,
}

/// The built-in audit set: the portfolio palette the project ships.
///
/// Kept as data so `contrast --builtin` works with no input file.
#[must_use]
pub fn builtin_pairs() -> Vec<ColorPair> {
    let pair = |name: &str, fg: &str, bg: &str, usage: &str| ColorPair {
        name: name.to_string(),
        foreground: fg.to_string(),
        background: bg.to_string(),
        usage: Some(usage.to_string()),
    };

    vec![
        pair(
            "White text on dark background",
            "#ffffff",
            "#050810",
            "Headings, primary text",
        ),
        pair(
            "Primary body text",
            "#cbd5e1",
            "#050810",
            "Body text, descriptions, navigation",
        ),
        pair(
            "Secondary text",
            "#697990",
            "#050810",
            "Footer text, secondary info",
        ),
        pair("Tertiary text", "#94a3b8", "#050810", "Labels, metadata"),
        pair(
            "Primary blue accent",
            "#1a7aff",
            "#050810",
            "Links, badges, interactive elements",
        ),
        pair(
            "Teaching green accent",
            "#10b981",
            "#050810",
            "Teaching section accents, metrics",
        ),
        pair(
            "White on primary blue",
            "#ffffff",
            "#086efd",
            "Button text, CTA elements",
        ),
        pair(
            "Primary blue hover state",
            "#2375ef",
            "#050810",
            "Hover state for blue elements",
        ),
        pair(
            "Text on secondary background",
            "#cbd5e1",
            "#0a0e27",
            "Text on glass cards",
        ),
        pair(
            "White on secondary background",
            "#ffffff",
            "#0a0e27",
            "Headings on glass cards",
        ),
    ]
}

/// Evaluates a list of pairs, failing on the first malformed color.
///
/// # Errors
///
/// Returns the offending [`ParseColorError`] so callers can surface the bad
/// input verbatim; no pair is silently skipped or defaulted.
pub fn evaluate_pairs(pairs: &[ColorPair]) -> Result<Vec<PairReport>, ParseColorError> {
    pairs
        .iter()
        .map(|pair| {
            let fg = RgbColor::from_hex(&pair.foreground)?;
            let bg = RgbColor::from_hex(&pair.background)?;
            Ok(PairReport {
                name: pair.name.clone(),
                foreground: fg.to_hex(),
                background: bg.to_hex(),
                usage: pair.usage.clone(),
                result: contrast::evaluate(fg, bg),
            })
        })
        .collect()
}

/// Formats evaluated pairs as a human-readable terminal report.
#[must_use]
pub fn format_terminal(reports: &[PairReport]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Accessibility Color Contrast Analysis");
    let _ = writeln!(out, "{}", "=".repeat(60));

    for (idx, report) in reports.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {}", idx + 1, report.name);
        let _ = writeln!(out, "{}", "-".repeat(60));
        let _ = writeln!(
            out,
            "   Foreground: {}   Background: {}",
            report.foreground, report.background
        );
        if let Some(usage) = &report.usage {
            let _ = writeln!(out, "   Usage: {usage}");
        }
        let _ = writeln!(out, "   Contrast ratio: {:.2}:1", report.result.ratio);

        for level in WcagLevel::ALL {
            let mark = if report.result.levels.passes(level) {
                "✓ PASS"
            } else {
                "✗ FAIL"
            };
            let _ = writeln!(
                out,
                "   {:<12} ({:>3}:1)  {}",
                level.label(),
                format_threshold(level.threshold()),
                mark
            );
        }
    }

    if reports.len() > 1 {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out, "Summary");

        let aa_failures: Vec<&PairReport> = reports
            .iter()
            .filter(|r| r.result.ratio < AA_NORMAL)
            .collect();
        let aaa_count = reports
            .iter()
            .filter(|r| r.result.ratio >= AAA_NORMAL)
            .count();

        if aa_failures.is_empty() {
            let _ = writeln!(out, "  WCAG 2.1 Level AA: all {} pairs pass", reports.len());
        } else {
            let _ = writeln!(out, "  Pairs failing AA normal text (4.5:1):");
            for failure in &aa_failures {
                let _ = writeln!(
                    out,
                    "    • {}: {:.2}:1",
                    failure.name, failure.result.ratio
                );
            }
        }
        let _ = writeln!(
            out,
            "  Pairs achieving AAA normal text: {}/{}",
            aaa_count,
            reports.len()
        );
    }

    out
}

/// Renders a threshold without trailing zeros (4.5, 3, 7).
fn format_threshold(threshold: f64) -> String {
    if (threshold - threshold.trunc()).abs() < f64::EPSILON {
        format!("{}", threshold as u32)
    } else {
        format!("{threshold}")
    }
}
