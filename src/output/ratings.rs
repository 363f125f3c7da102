use crate::baseline::Rating;

use super::ansi;

/// Display text for each rating.
///
/// Rating semantics live in [`Rating`]; this table only decides how a
/// rating looks on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingLabels {
    pub good: &'static str,
    pub medium: &'static str,
    pub bad: &'static str,
}

impl RatingLabels {
    /// Fullwidth labels used for analysis results.
    pub const FULLWIDTH: Self = Self {
        good: "[ＧＯＯＤ]",
        medium: "[ＭＥＤ]",
        bad: "[ＢＡＤ]",
    };

    /// Letter-spaced labels used by the demo.
    pub const SPACED: Self = Self {
        good: "[G O O D]",
        medium: "[M E D]",
        bad: "[B A D]",
    };

    #[must_use]
    pub const fn label(&self, rating: Rating) -> &'static str {
        match rating {
            Rating::Good => self.good,
            Rating::Medium => self.medium,
            Rating::Bad => self.bad,
        }
    }

    /// The label, wrapped in the rating's color when `use_colors` is set.
    #[must_use]
    pub fn render(&self, rating: Rating, use_colors: bool) -> String {
        let label = self.label(rating);
        if !use_colors {
            return label.to_string();
        }
        let color = match rating {
            Rating::Good => ansi::GREEN,
            Rating::Medium => ansi::YELLOW,
            Rating::Bad => ansi::RED,
        };
        format!("{color}{label}{}", ansi::RESET)
    }
}

impl Default for RatingLabels {
    fn default() -> Self {
        Self::FULLWIDTH
    }
}
