//! Exoplanet Records
//!
//! One row of the exoplanet archive (or of the scored CSV export). Every
//! measurement is optional: `None` means "not measured", which is not the
//! same thing as zero.
//!
//! Field names follow the archive column names so that archive JSON and CSV
//! headers deserialize without a mapping layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::utils::scores::UnitScore;

/// A single exoplanet with its measured properties and precomputed scores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExoplanetRecord {
    /// Unique planet name (e.g., "Kepler-442 b")
    pub pl_name: String,

    // === Planet ===
    pub pl_rade: Option<f64>,    // Radius (Earth radii)
    pub pl_bmasse: Option<f64>,  // Mass (Earth masses)
    pub pl_orbper: Option<f64>,  // Orbital period (days)
    pub pl_eqt: Option<f64>,     // Equilibrium temperature (K)

    // === Host star ===
    pub st_teff: Option<f64>,    // Effective temperature (K)
    pub st_mass: Option<f64>,    // Solar masses
    pub st_rad: Option<f64>,     // Solar radii
    pub st_met: Option<f64>,     // Metallicity [dex]

    // === System / discovery ===
    pub sy_dist: Option<f64>,
    pub disc_year: Option<i64>,
    pub disc_facility: Option<String>,

    // === Precomputed scores, all on the 0-1 scale ===
    pub habitability_score: Option<f64>,
    pub terraformability_score: Option<f64>,
    #[serde(rename = "ESI")]
    pub esi: Option<f64>,
    pub pl_water_probability: Option<f64>,
    pub surface_gravity: Option<f64>,

    /// Any further columns the source carried, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ExoplanetRecord {
    /// Record with only a name; every measurement unknown
    pub fn named(name: impl Into<String>) -> Self {
        ExoplanetRecord {
            pl_name: name.into(),
            ..Default::default()
        }
    }

    /// Habitability on the canonical 0-1 scale
    ///
    /// Unknown and out-of-range values count as 0; a 0-100 score is never
    /// squeezed into the 0-1 range.
    pub fn habitability(&self) -> UnitScore {
        unit_score(self.habitability_score)
    }

    pub fn terraformability(&self) -> UnitScore {
        unit_score(self.terraformability_score)
    }

    pub fn esi_score(&self) -> UnitScore {
        unit_score(self.esi)
    }

    pub fn water_probability(&self) -> UnitScore {
        unit_score(self.pl_water_probability)
    }

    /// Drop any score outside [0, 1], logging the record and column
    ///
    /// Returns the number of values discarded.
    pub fn discard_invalid_scores(&mut self) -> usize {
        let name = self.pl_name.as_str();
        let mut discarded = 0;
        for (column, slot) in [
            ("habitability_score", &mut self.habitability_score),
            ("terraformability_score", &mut self.terraformability_score),
            ("ESI", &mut self.esi),
            ("pl_water_probability", &mut self.pl_water_probability),
        ] {
            if let Some(value) = *slot {
                if UnitScore::new(value).is_none() {
                    tracing::warn!(
                        "Discarding {} = {} for '{}': not on the 0-1 scale",
                        column,
                        value,
                        name
                    );
                    *slot = None;
                    discarded += 1;
                }
            }
        }
        discarded
    }

    /// Raw value of one of the comparable properties
    pub fn value(&self, property: ComparableProperty) -> Option<f64> {
        match property {
            ComparableProperty::Radius => self.pl_rade,
            ComparableProperty::Mass => self.pl_bmasse,
            ComparableProperty::OrbitalPeriod => self.pl_orbper,
            ComparableProperty::EquilibriumTemperature => self.pl_eqt,
            ComparableProperty::StarTemperature => self.st_teff,
            ComparableProperty::StarMass => self.st_mass,
            ComparableProperty::StarRadius => self.st_rad,
            ComparableProperty::Habitability => self.habitability_score,
            ComparableProperty::Terraformability => self.terraformability_score,
            ComparableProperty::SurfaceGravity => self.surface_gravity,
            ComparableProperty::Esi => self.esi,
            ComparableProperty::WaterProbability => self.pl_water_probability,
        }
    }

    /// Numeric value for any known column key, falling back to `extra`
    pub fn numeric_field(&self, key: &str) -> Option<f64> {
        if let Some(property) = ComparableProperty::from_key(key) {
            return self.value(property);
        }
        match key {
            "st_met" => self.st_met,
            "sy_dist" => self.sy_dist,
            "disc_year" => self.disc_year.map(|y| y as f64),
            _ => self.extra.get(key).and_then(Value::as_f64),
        }
    }
}

// ============================================================================
// Comparable Properties
// ============================================================================

/// The fixed list of properties a user may pick for the bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComparableProperty {
    #[default]
    #[serde(rename = "pl_rade")]
    Radius,
    #[serde(rename = "pl_bmasse")]
    Mass,
    #[serde(rename = "pl_orbper")]
    OrbitalPeriod,
    #[serde(rename = "pl_eqt")]
    EquilibriumTemperature,
    #[serde(rename = "st_teff")]
    StarTemperature,
    #[serde(rename = "st_mass")]
    StarMass,
    #[serde(rename = "st_rad")]
    StarRadius,
    #[serde(rename = "habitability_score")]
    Habitability,
    #[serde(rename = "terraformability_score")]
    Terraformability,
    #[serde(rename = "surface_gravity")]
    SurfaceGravity,
    #[serde(rename = "ESI")]
    Esi,
    #[serde(rename = "pl_water_probability")]
    WaterProbability,
}

impl ComparableProperty {
    pub const ALL: [ComparableProperty; 12] = [
        ComparableProperty::Radius,
        ComparableProperty::Mass,
        ComparableProperty::OrbitalPeriod,
        ComparableProperty::EquilibriumTemperature,
        ComparableProperty::StarTemperature,
        ComparableProperty::StarMass,
        ComparableProperty::StarRadius,
        ComparableProperty::Habitability,
        ComparableProperty::Terraformability,
        ComparableProperty::SurfaceGravity,
        ComparableProperty::Esi,
        ComparableProperty::WaterProbability,
    ];

    /// Column key in the source data
    pub fn key(&self) -> &'static str {
        match self {
            ComparableProperty::Radius => "pl_rade",
            ComparableProperty::Mass => "pl_bmasse",
            ComparableProperty::OrbitalPeriod => "pl_orbper",
            ComparableProperty::EquilibriumTemperature => "pl_eqt",
            ComparableProperty::StarTemperature => "st_teff",
            ComparableProperty::StarMass => "st_mass",
            ComparableProperty::StarRadius => "st_rad",
            ComparableProperty::Habitability => "habitability_score",
            ComparableProperty::Terraformability => "terraformability_score",
            ComparableProperty::SurfaceGravity => "surface_gravity",
            ComparableProperty::Esi => "ESI",
            ComparableProperty::WaterProbability => "pl_water_probability",
        }
    }

    /// Default display label, used when the host does not supply its own
    pub fn label(&self) -> &'static str {
        match self {
            ComparableProperty::Radius => "Planet Radius (Earth radii)",
            ComparableProperty::Mass => "Planet Mass (Earth masses)",
            ComparableProperty::OrbitalPeriod => "Orbital Period (days)",
            ComparableProperty::EquilibriumTemperature => "Equilibrium Temperature (K)",
            ComparableProperty::StarTemperature => "Star Temperature (K)",
            ComparableProperty::StarMass => "Star Mass (Solar masses)",
            ComparableProperty::StarRadius => "Star Radius (Solar radii)",
            ComparableProperty::Habitability => "Habitability Score",
            ComparableProperty::Terraformability => "Terraformability Score",
            ComparableProperty::SurfaceGravity => "Surface Gravity",
            ComparableProperty::Esi => "Earth Similarity Index",
            ComparableProperty::WaterProbability => "Water Probability",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }
}

fn unit_score(value: Option<f64>) -> UnitScore {
    value.and_then(UnitScore::new).unwrap_or(UnitScore::ZERO)
}

/// Label lookup by raw key; unknown keys are shown as-is
pub fn property_label(key: &str) -> &str {
    ComparableProperty::from_key(key)
        .map(|p| p.label())
        .unwrap_or(key)
}
