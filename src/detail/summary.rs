//! Narrative summary and search-card hints

use serde::Serialize;

use crate::detail::classify::PlanetType;
use crate::detail::format::{format_number, UNKNOWN};
use crate::record::ExoplanetRecord;
use crate::utils::color_bands::ColorBand;

/// Habitability above which a planet is called "promising" and highlighted
pub const HIGH_HABITABILITY: f64 = 0.7;
pub const MODERATE_HABITABILITY: f64 = 0.4;

/// Water probability above which a card mentions water
pub const WATER_HINT_THRESHOLD: f64 = 0.5;

/// Smallest bar width on a search card, so 0% still shows a sliver
pub const MIN_BAR_WIDTH_PERCENT: f64 = 5.0;

/// Free-text description of a planet for the detail page
pub fn planet_summary(record: &ExoplanetRecord) -> String {
    let planet_type = PlanetType::from_radius(record.pl_rade);
    let habitability = record.habitability().value();
    let terraformability = record.terraformability().value();

    let mut summary = format!(
        "{} is a {} exoplanet",
        record.pl_name,
        planet_type.label().to_lowercase()
    );

    if let Some(dist) = record.sy_dist.filter(|d| *d != 0.0) {
        summary.push_str(&format!(
            " located approximately {} from Earth",
            format_number("sy_dist", dist)
        ));
    }
    if let Some(year) = record.disc_year.filter(|y| *y != 0) {
        summary.push_str(&format!(", discovered in {}", year));
    }
    if let Some(facility) = record.disc_facility.as_deref().filter(|f| !f.is_empty()) {
        summary.push_str(&format!(" by {}", facility));
    }
    summary.push_str(". ");

    if let Some(period) = record.pl_orbper.filter(|p| *p != 0.0) {
        summary.push_str(&format!(
            "It orbits its host star every {}",
            format_number("pl_orbper", period)
        ));
        if let Some(temp) = record.pl_eqt.filter(|t| *t != 0.0) {
            summary.push_str(&format!(
                " with a surface temperature of approximately {}",
                format_number("pl_eqt", temp)
            ));
        }
        summary.push_str(". ");
    }

    if habitability > 0.0 {
        let score = format_number("habitability_score", habitability);
        if habitability > HIGH_HABITABILITY {
            summary.push_str(&format!(
                "With a high habitability score of {}, it's considered one of the more promising candidates for potential habitability.",
                score
            ));
        } else if habitability > MODERATE_HABITABILITY {
            summary.push_str(&format!(
                "It has a moderate habitability score of {}, suggesting some conditions that might support certain forms of life.",
                score
            ));
        } else {
            summary.push_str(&format!(
                "Its low habitability score of {} indicates conditions that would be challenging for Earth-like life.",
                score
            ));
        }
    }

    if terraformability > 0.0 {
        summary.push_str(&format!(
            " The planet has a terraformability potential of {}.",
            format_number("terraformability_score", terraformability)
        ));
    }

    summary.trim_end().to_string()
}

/// What a search-result card shows besides the name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardHints {
    pub description: &'static str,
    /// Sparkle marker for promising planets
    pub highlighted: bool,
    pub band: ColorBand,
    pub band_class: &'static str,
    pub bar_width_percent: f64,
    pub habitability_label: String,
    pub radius: String,
    pub mass: String,
    pub orbit: String,
}

impl CardHints {
    pub fn from_record(record: &ExoplanetRecord) -> Self {
        let habitability = record.habitability();
        let water = record.water_probability().value();
        let band = habitability.band();
        let percent = habitability.to_percent();

        CardHints {
            description: if water > WATER_HINT_THRESHOLD {
                "Potential water present"
            } else {
                "Rocky exoplanet"
            },
            highlighted: habitability.value() > HIGH_HABITABILITY,
            band,
            band_class: band.css_class(),
            bar_width_percent: percent.value().max(MIN_BAR_WIDTH_PERCENT),
            habitability_label: percent.to_string(),
            radius: times_earth(record.pl_rade),
            mass: times_earth(record.pl_bmasse),
            orbit: record
                .pl_orbper
                .filter(|p| p.is_finite() && *p != 0.0)
                .map(|p| format!("{:.1} days", p))
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

fn times_earth(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite() && *v != 0.0)
        .map(|v| format!("{:.2} × Earth", v))
        .unwrap_or_else(|| UNKNOWN.to_string())
}
