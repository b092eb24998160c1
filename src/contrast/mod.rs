//! WCAG 2.1 contrast ratio computation and compliance classification.
//!
//! Implements the relative luminance and contrast ratio formulas from
//! WCAG 2.1 §1.4.3 and classifies ratios against the four fixed conformance
//! thresholds (AA/AAA, normal/large text).

pub mod report;

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};

/// Minimum ratio for AA conformance with normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AA conformance with large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA conformance with normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AAA conformance with large text.
pub const AAA_LARGE: f64 = 4.5;

/// WCAG conformance level and text size combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level AA, normal text (4.5:1)
    AaNormal,
    /// Level AA, large text (3:1)
    AaLarge,
    /// Level AAA, normal text (7:1)
    AaaNormal,
    /// Level AAA, large text (4.5:1)
    AaaLarge,
}

impl WcagLevel {
    /// All levels in conventional reporting order.
    pub const ALL: [Self; 4] = [Self::AaNormal, Self::AaLarge, Self::AaaNormal, Self::AaaLarge];

    /// Minimum contrast ratio required by this level.
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::AaNormal => AA_NORMAL,
            Self::AaLarge => AA_LARGE,
            Self::AaaNormal => AAA_NORMAL,
            Self::AaaLarge => AAA_LARGE,
        }
    }

    /// Human-readable label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AaNormal => "AA Normal",
            Self::AaLarge => "AA Large",
            Self::AaaNormal => "AAA Normal",
            Self::AaaLarge => "AAA Large",
        }
    }
}

/// Pass/fail verdicts for all four WCAG levels at a given ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compliance {
    /// AA, normal text (>= 4.5)
    pub aa_normal: bool,
    /// AA, large text (>= 3.0)
    pub aa_large: bool,
    /// AAA, normal text (>= 7.0)
    pub aaa_normal: bool,
    /// AAA, large text (>= 4.5)
    pub aaa_large: bool,
}

impl Compliance {
    /// Whether the given level passed.
    #[must_use]
    pub const fn passes(&self, level: WcagLevel) -> bool {
        match level {
            WcagLevel::AaNormal => self.aa_normal,
            WcagLevel::AaLarge => self.aa_large,
            WcagLevel::AaaNormal => self.aaa_normal,
            WcagLevel::AaaLarge => self.aaa_large,
        }
    }
}

/// Result of evaluating one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Contrast ratio, in [1, 21]
    pub ratio: f64,
    /// Per-level verdicts at that ratio
    pub levels: Compliance,
}

/// Computes the WCAG relative luminance of a color.
///
/// Each sRGB channel is normalized to [0, 1] and linearized with the
/// standard transfer function before the weighted sum.
#[must_use]
pub fn relative_luminance(color: RgbColor) -> f64 {
    let linear = |c: u8| {
        let cs = f64::from(c) / 255.0;
        if cs <= 0.03928 {
            cs / 12.92
        } else {
            ((cs + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
}

/// Computes the WCAG contrast ratio between two colors.
///
/// The ratio is computed from the larger and smaller luminance, never from a
/// fixed foreground/background order, so `contrast_ratio(a, b)` always
/// equals `contrast_ratio(b, a)`. The result lies in [1, 21].
#[must_use]
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);

    let brightest = la.max(lb);
    let darkest = la.min(lb);

    (brightest + 0.05) / (darkest + 0.05)
}

/// Classifies a ratio against the four WCAG thresholds.
#[must_use]
pub fn classify(ratio: f64) -> Compliance {
    Compliance {
        aa_normal: ratio >= AA_NORMAL,
        aa_large: ratio >= AA_LARGE,
        aaa_normal: ratio >= AAA_NORMAL,
        aaa_large: ratio >= AAA_LARGE,
    }
}

/// Evaluates a foreground/background pair in one step.
#[must_use]
pub fn evaluate(fg: RgbColor, bg: RgbColor) -> ContrastResult {
    let ratio = contrast_ratio(fg, bg);
    ContrastResult {
        ratio,
        levels: classify(ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: RgbColor = RgbColor::new(255, 255, 255);
    const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(approx(relative_luminance(BLACK), 0.0));
        assert!(approx(relative_luminance(WHITE), 1.0));
    }

    #[test]
    fn test_max_ratio_is_21() {
        let ratio = contrast_ratio(WHITE, BLACK);
        assert!(approx(ratio, 21.0), "got {ratio}");
    }

    #[test]
    fn test_identity_floor() {
        for color in [WHITE, BLACK, RgbColor::new(26, 122, 255), RgbColor::new(5, 8, 16)] {
            let ratio = contrast_ratio(color, color);
            assert!(approx(ratio, 1.0), "{color} against itself gave {ratio}");
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (RgbColor::new(26, 122, 255), RgbColor::new(5, 8, 16)),
            (RgbColor::new(0xcb, 0xd5, 0xe1), RgbColor::new(0x0a, 0x0e, 0x27)),
            (WHITE, RgbColor::new(8, 110, 253)),
        ];
        for (a, b) in pairs {
            assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_portfolio_headline_pair() {
        // White headings on the dark page background
        let fg = RgbColor::from_hex("#ffffff").unwrap();
        let bg = RgbColor::from_hex("#050810").unwrap();
        let result = evaluate(fg, bg);
        assert!((result.ratio - 20.0254).abs() < 0.01, "got {}", result.ratio);
        assert!(result.levels.aaa_normal);
    }

    #[test]
    fn test_classify_thresholds() {
        let c = classify(4.5);
        assert!(c.aa_normal && c.aa_large && c.aaa_large);
        assert!(!c.aaa_normal);

        let c = classify(3.0);
        assert!(c.aa_large);
        assert!(!c.aa_normal && !c.aaa_normal && !c.aaa_large);

        let c = classify(7.0);
        assert!(c.aa_normal && c.aa_large && c.aaa_normal && c.aaa_large);

        let c = classify(1.0);
        assert!(!c.aa_normal && !c.aa_large && !c.aaa_normal && !c.aaa_large);
    }

    #[test]
    fn test_compliance_passes_matches_fields() {
        let c = classify(5.0);
        assert!(c.passes(WcagLevel::AaNormal));
        assert!(c.passes(WcagLevel::AaLarge));
        assert!(!c.passes(WcagLevel::AaaNormal));
        assert!(c.passes(WcagLevel::AaaLarge));
    }

    #[test]
    fn test_level_metadata() {
        assert_eq!(WcagLevel::AaNormal.threshold(), 4.5);
        assert_eq!(WcagLevel::AaLarge.threshold(), 3.0);
        assert_eq!(WcagLevel::AaaNormal.threshold(), 7.0);
        assert_eq!(WcagLevel::AaaLarge.threshold(), 4.5);
        assert_eq!(WcagLevel::ALL.len(), 4);
    }
}
