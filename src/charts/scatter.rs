//! Scatter chart: radius (x) vs. equilibrium temperature (y)
//!
//! Bubble area follows mass, bubble color follows the habitability band.

use serde::Serialize;

use crate::record::ExoplanetRecord;
use crate::utils::color_bands::ColorBand;
use crate::utils::normalization::normalize;

/// Mass assumed when a planet's mass is unknown (Earth masses)
pub const DEFAULT_MASS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterConfig {
    pub bubble_min: f64,
    pub bubble_max: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        ScatterConfig {
            bubble_min: 50.0,
            bubble_max: 400.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub radius: f64,      // x, Earth radii
    pub temperature: f64, // y, K
    pub mass: f64,        // Earth masses, `DEFAULT_MASS` when unknown
    pub habitability: f64,
    pub bubble_size: f64,
    pub band: ColorBand,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<ScatterPoint>,
}

/// Scatter points for records that have both radius and temperature
///
/// Bubble sizes scale linearly from 0 to the heaviest plotted mass onto
/// `[bubble_min, bubble_max]`.
pub fn scatter_chart(records: &[ExoplanetRecord], config: &ScatterConfig) -> ScatterChart {
    let plotted: Vec<(&ExoplanetRecord, f64, f64, f64)> = records
        .iter()
        .filter_map(|r| {
            let radius = r.pl_rade.filter(|v| v.is_finite())?;
            let temperature = r.pl_eqt.filter(|v| v.is_finite())?;
            let mass = r.pl_bmasse.filter(|v| v.is_finite()).unwrap_or(DEFAULT_MASS);
            Some((r, radius, temperature, mass))
        })
        .collect();

    let max_mass = plotted.iter().map(|p| p.3).fold(0.0_f64, f64::max);
    let span = config.bubble_max - config.bubble_min;

    let points = plotted
        .into_iter()
        .map(|(record, radius, temperature, mass)| {
            let habitability = record.habitability();
            let band = habitability.band();
            ScatterPoint {
                name: record.pl_name.clone(),
                radius,
                temperature,
                mass,
                habitability: habitability.value(),
                bubble_size: config.bubble_min + span * normalize(mass, 0.0, max_mass),
                band,
                color: band.hsl(),
            }
        })
        .collect();

    ScatterChart {
        x_label: "Planet Radius (Earth radii)",
        y_label: "Equilibrium Temperature (K)",
        points,
    }
}
