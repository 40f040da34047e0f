//! Habitability Color Bands
//!
//! Maps a score to one of five qualitative bands (emerald, green, yellow,
//! orange, red) at 80/60/40/20 percent of the declared scale.
//!
//! The scale is always explicit. A 0-1 score checked against 0-100
//! boundaries lands in "red" for every planet, so callers either pass the
//! `ScoreScale` they mean or go through `UnitScore::band` /
//! `PercentScore::band`.

use serde::{Deserialize, Serialize};

/// Scale a raw score is expressed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreScale {
    /// 0.0 - 1.0
    Unit,
    /// 0 - 100
    Percent,
}

impl ScoreScale {
    /// Upper end of the scale
    pub fn max(&self) -> f64 {
        match self {
            ScoreScale::Unit => 1.0,
            ScoreScale::Percent => 100.0,
        }
    }

    /// Lower bounds of emerald, green, yellow and orange, in that order
    fn thresholds(&self) -> [f64; 4] {
        match self {
            ScoreScale::Unit => [0.8, 0.6, 0.4, 0.2],
            ScoreScale::Percent => [80.0, 60.0, 40.0, 20.0],
        }
    }
}

/// Qualitative habitability band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    Emerald,
    Green,
    Yellow,
    Orange,
    Red,
}

impl ColorBand {
    pub const ALL: [ColorBand; 5] = [
        ColorBand::Emerald,
        ColorBand::Green,
        ColorBand::Yellow,
        ColorBand::Orange,
        ColorBand::Red,
    ];

    /// Fill color used by the canvas/SVG renderers and the scatter chart
    pub fn hsl(&self) -> &'static str {
        match self {
            ColorBand::Emerald => "hsl(152, 75%, 40%)",
            ColorBand::Green => "hsl(142, 71%, 45%)",
            ColorBand::Yellow => "hsl(48, 96%, 53%)",
            ColorBand::Orange => "hsl(27, 96%, 61%)",
            ColorBand::Red => "hsl(0, 84%, 60%)",
        }
    }

    /// Tailwind background class used by the search cards
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorBand::Emerald => "bg-emerald-500",
            ColorBand::Green => "bg-green-500",
            ColorBand::Yellow => "bg-yellow-500",
            ColorBand::Orange => "bg-orange-500",
            ColorBand::Red => "bg-red-500",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorBand::Emerald => "emerald",
            ColorBand::Green => "green",
            ColorBand::Yellow => "yellow",
            ColorBand::Orange => "orange",
            ColorBand::Red => "red",
        }
    }
}

/// Band for a score on the given scale
///
/// Boundaries are inclusive on the lower side:
/// - [0.8, 1.0] → emerald
/// - [0.6, 0.8) → green
/// - [0.4, 0.6) → yellow
/// - [0.2, 0.4) → orange
/// - below 0.2 (or NaN) → red
pub fn band(score: f64, scale: ScoreScale) -> ColorBand {
    let [emerald, green, yellow, orange] = scale.thresholds();

    if score >= emerald {
        ColorBand::Emerald
    } else if score >= green {
        ColorBand::Green
    } else if score >= yellow {
        ColorBand::Yellow
    } else if score >= orange {
        ColorBand::Orange
    } else {
        ColorBand::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(band(0.8, ScoreScale::Unit), ColorBand::Emerald);
        assert_eq!(band(0.7999, ScoreScale::Unit), ColorBand::Green);
        assert_eq!(band(0.6, ScoreScale::Unit), ColorBand::Green);
        assert_eq!(band(0.4, ScoreScale::Unit), ColorBand::Yellow);
        assert_eq!(band(0.2, ScoreScale::Unit), ColorBand::Orange);
        assert_eq!(band(0.1999, ScoreScale::Unit), ColorBand::Red);
        assert_eq!(band(0.0, ScoreScale::Unit), ColorBand::Red);
        assert_eq!(band(1.0, ScoreScale::Unit), ColorBand::Emerald);
    }

    #[test]
    fn test_percent_boundaries() {
        assert_eq!(band(80.0, ScoreScale::Percent), ColorBand::Emerald);
        assert_eq!(band(79.99, ScoreScale::Percent), ColorBand::Green);
        assert_eq!(band(60.0, ScoreScale::Percent), ColorBand::Green);
        assert_eq!(band(40.0, ScoreScale::Percent), ColorBand::Yellow);
        assert_eq!(band(20.0, ScoreScale::Percent), ColorBand::Orange);
        assert_eq!(band(19.99, ScoreScale::Percent), ColorBand::Red);
    }

    #[test]
    fn test_scale_mixup_is_visible() {
        // A 0-1 score read as a percentage collapses to red
        assert_eq!(band(0.95, ScoreScale::Percent), ColorBand::Red);
        assert_eq!(band(0.95, ScoreScale::Unit), ColorBand::Emerald);
    }

    #[test]
    fn test_nan_is_red() {
        assert_eq!(band(f64::NAN, ScoreScale::Unit), ColorBand::Red);
    }

    #[test]
    fn test_scale_max() {
        assert_eq!(ScoreScale::Unit.max(), 1.0);
        assert_eq!(ScoreScale::Percent.max(), 100.0);
    }
}
