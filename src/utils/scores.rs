//! Score Scales
//!
//! Habitability, terraformability, ESI and water probability are stored on
//! the 0-1 scale everywhere inside the engine (`UnitScore`). Percentages only
//! exist at the display boundary (`PercentScore`). Keeping the two as
//! distinct types means a 0-100 value cannot reach a comparator that expects
//! 0-1 (or the reverse) without an explicit conversion.

use serde::Serialize;
use std::fmt;

use crate::utils::color_bands::{band, ColorBand, ScoreScale};

/// Score on the canonical 0-1 scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct UnitScore(f64);

impl UnitScore {
    pub const ZERO: UnitScore = UnitScore(0.0);

    /// Checked constructor: `None` for values outside [0, 1] or NaN
    pub fn new(value: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&value) {
            Some(UnitScore(value))
        } else {
            None
        }
    }

    /// Clamp into [0, 1]; NaN becomes 0
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            UnitScore(0.0)
        } else {
            UnitScore(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_percent(self) -> PercentScore {
        PercentScore(self.0 * 100.0)
    }

    pub fn band(self) -> ColorBand {
        band(self.0, ScoreScale::Unit)
    }
}

/// Score on the 0-100 display scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct PercentScore(f64);

impl PercentScore {
    /// Checked constructor: `None` for values outside [0, 100] or NaN
    pub fn new(value: f64) -> Option<Self> {
        if (0.0..=100.0).contains(&value) {
            Some(PercentScore(value))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_unit(self) -> UnitScore {
        UnitScore::saturating(self.0 / 100.0)
    }

    pub fn band(self) -> ColorBand {
        band(self.0, ScoreScale::Percent)
    }
}

impl fmt::Display for PercentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_score_bounds() {
        assert!(UnitScore::new(0.0).is_some());
        assert!(UnitScore::new(1.0).is_some());
        assert!(UnitScore::new(1.01).is_none());
        assert!(UnitScore::new(-0.1).is_none());
        assert!(UnitScore::new(f64::NAN).is_none());
        assert!(UnitScore::new(70.0).is_none()); // percent value rejected
    }

    #[test]
    fn test_saturating() {
        assert_eq!(UnitScore::saturating(1.7).value(), 1.0);
        assert_eq!(UnitScore::saturating(-3.0).value(), 0.0);
        assert_eq!(UnitScore::saturating(f64::NAN).value(), 0.0);
    }

    #[test]
    fn test_percent_conversion() {
        let unit = UnitScore::saturating(0.734);
        let percent = unit.to_percent();
        assert_relative_eq!(percent.value(), 73.4, epsilon = 1e-9);
        assert_eq!(percent.to_string(), "73%");
        assert_relative_eq!(percent.to_unit().value(), 0.734, epsilon = 1e-9);
    }

    #[test]
    fn test_band_agrees_across_scales() {
        for raw in [0.0, 0.15, 0.2, 0.35, 0.4, 0.59, 0.6, 0.8, 0.95, 1.0] {
            let unit = UnitScore::saturating(raw);
            assert_eq!(unit.band(), unit.to_percent().band(), "score {}", raw);
        }
    }
}
