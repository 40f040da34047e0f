//! Normalization Utilities
//!
//! Converts raw physical properties onto a shared dimensionless [0, 1] scale
//! so they can sit on the same radar axis or drive the same size budget.
//!
//! Domains are fixed per property (not fitted to the data set):
//! - radius: [0, 15] Earth radii
//! - mass: [0, 20] Earth masses
//! - surface gravity: [0, 10]
//! - equilibrium temperature: peaks at 288 K, falls off linearly over 500 K
//! - habitability, water probability, ESI: already 0-1, passed through
//!
//! Every chart adapter goes through this module; none of them scale values
//! on their own.

use serde::Serialize;

use crate::record::ExoplanetRecord;
use crate::utils::scores::UnitScore;

/// Closed value range used for linear scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

pub const RADIUS_DOMAIN: Domain = Domain { min: 0.0, max: 15.0 };
pub const MASS_DOMAIN: Domain = Domain { min: 0.0, max: 20.0 };
pub const GRAVITY_DOMAIN: Domain = Domain { min: 0.0, max: 10.0 };

/// Earth's mean surface temperature (K), the peak of the temperature curve
pub const EARTH_TEMPERATURE_K: f64 = 288.0;

/// Distance from 288 K at which the temperature similarity reaches 0
pub const TEMPERATURE_FALLOFF_K: f64 = 500.0;

/// Linear min-max scaling clamped to [0, 1]
///
/// Non-finite input and empty domains (`max <= min`) yield 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() || !(max > min) {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Earth-likeness of an equilibrium temperature: 1 at 288 K, 0 at ±500 K
pub fn normalize_temperature(kelvin: f64) -> f64 {
    if !kelvin.is_finite() {
        return 0.0;
    }
    (1.0 - (kelvin - EARTH_TEMPERATURE_K).abs() / TEMPERATURE_FALLOFF_K).clamp(0.0, 1.0)
}

/// Scores are already 0-1 and pass through unchanged
///
/// Anything off that scale (a percentage, NaN) is treated as unknown and
/// becomes 0 rather than being clamped to 1.
pub fn passthrough_score(score: f64) -> f64 {
    UnitScore::new(score).map(UnitScore::value).unwrap_or(0.0)
}

// ============================================================================
// Property Table
// ============================================================================

/// How a property is brought onto [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scaling {
    Linear(Domain),
    EarthTemperature,
    Passthrough,
}

/// Properties that have a normalized form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizedProperty {
    Size,
    Mass,
    Temperature,
    Gravity,
    Habitability,
    Water,
    Esi,
}

impl NormalizedProperty {
    pub const ALL: [NormalizedProperty; 7] = [
        NormalizedProperty::Size,
        NormalizedProperty::Mass,
        NormalizedProperty::Temperature,
        NormalizedProperty::Gravity,
        NormalizedProperty::Habitability,
        NormalizedProperty::Water,
        NormalizedProperty::Esi,
    ];

    pub fn scaling(&self) -> Scaling {
        match self {
            NormalizedProperty::Size => Scaling::Linear(RADIUS_DOMAIN),
            NormalizedProperty::Mass => Scaling::Linear(MASS_DOMAIN),
            NormalizedProperty::Gravity => Scaling::Linear(GRAVITY_DOMAIN),
            NormalizedProperty::Temperature => Scaling::EarthTemperature,
            NormalizedProperty::Habitability
            | NormalizedProperty::Water
            | NormalizedProperty::Esi => Scaling::Passthrough,
        }
    }

    /// Axis label shown on the radar chart
    pub fn label(&self) -> &'static str {
        match self {
            NormalizedProperty::Size => "Size",
            NormalizedProperty::Mass => "Mass",
            NormalizedProperty::Temperature => "Temperature",
            NormalizedProperty::Gravity => "Gravity",
            NormalizedProperty::Habitability => "Habitability",
            NormalizedProperty::Water => "Water",
            NormalizedProperty::Esi => "ESI",
        }
    }

    /// Raw source value, `None` when the record lacks it
    pub fn raw(&self, record: &ExoplanetRecord) -> Option<f64> {
        match self {
            NormalizedProperty::Size => record.pl_rade,
            NormalizedProperty::Mass => record.pl_bmasse,
            NormalizedProperty::Temperature => record.pl_eqt,
            NormalizedProperty::Gravity => record.surface_gravity,
            NormalizedProperty::Habitability => record.habitability_score,
            NormalizedProperty::Water => record.pl_water_probability,
            NormalizedProperty::Esi => record.esi,
        }
    }
}

/// Normalize one raw value according to a scaling rule
pub fn apply_scaling(value: f64, scaling: Scaling) -> f64 {
    match scaling {
        Scaling::Linear(domain) => normalize(value, domain.min, domain.max),
        Scaling::EarthTemperature => normalize_temperature(value),
        Scaling::Passthrough => passthrough_score(value),
    }
}

/// Normalized value of a property; missing measurements become 0
///
/// An incomplete record therefore under-scores on the radar instead of
/// silently dropping out of the comparison.
pub fn normalize_property(record: &ExoplanetRecord, property: NormalizedProperty) -> f64 {
    property
        .raw(record)
        .map(|raw| apply_scaling(raw, property.scaling()))
        .unwrap_or(0.0)
}

// ============================================================================
// Normalized Vector
// ============================================================================

/// All normalized properties of one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedVector {
    pub name: String,
    pub size: f64,
    pub mass: f64,
    pub temperature: f64,
    pub gravity: f64,
    pub habitability: f64,
    pub water: f64,
    pub esi: f64,
}

impl NormalizedVector {
    pub fn from_record(record: &ExoplanetRecord) -> Self {
        NormalizedVector {
            name: record.pl_name.clone(),
            size: normalize_property(record, NormalizedProperty::Size),
            mass: normalize_property(record, NormalizedProperty::Mass),
            temperature: normalize_property(record, NormalizedProperty::Temperature),
            gravity: normalize_property(record, NormalizedProperty::Gravity),
            habitability: normalize_property(record, NormalizedProperty::Habitability),
            water: normalize_property(record, NormalizedProperty::Water),
            esi: normalize_property(record, NormalizedProperty::Esi),
        }
    }

    pub fn get(&self, property: NormalizedProperty) -> f64 {
        match property {
            NormalizedProperty::Size => self.size,
            NormalizedProperty::Mass => self.mass,
            NormalizedProperty::Temperature => self.temperature,
            NormalizedProperty::Gravity => self.gravity,
            NormalizedProperty::Habitability => self.habitability,
            NormalizedProperty::Water => self.water,
            NormalizedProperty::Esi => self.esi,
        }
    }
}

/// Normalize every record, preserving order
pub fn normalize_all(records: &[ExoplanetRecord]) -> Vec<NormalizedVector> {
    records.iter().map(NormalizedVector::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_clamps() {
        assert_relative_eq!(normalize(7.5, 0.0, 15.0), 0.5, epsilon = 1e-12);
        assert_eq!(normalize(-2.0, 0.0, 15.0), 0.0);
        assert_eq!(normalize(40.0, 0.0, 15.0), 1.0);
        assert_eq!(normalize(f64::NAN, 0.0, 15.0), 0.0);
        assert_eq!(normalize(3.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_temperature_curve() {
        assert_relative_eq!(normalize_temperature(288.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_temperature(538.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(normalize_temperature(38.0), 0.5, epsilon = 1e-12);
        assert_eq!(normalize_temperature(1500.0), 0.0);
        assert_eq!(normalize_temperature(0.0), 0.0);
    }

    #[test]
    fn test_temperature_symmetric() {
        for delta in [10.0, 120.0, 250.0, 499.0] {
            assert_relative_eq!(
                normalize_temperature(EARTH_TEMPERATURE_K + delta),
                normalize_temperature(EARTH_TEMPERATURE_K - delta),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_score_passthrough_idempotent() {
        for score in [0.0, 0.05, 0.333, 0.5, 0.95, 1.0] {
            let once = passthrough_score(score);
            assert_eq!(once, score);
            assert_eq!(passthrough_score(once), once);
        }
    }

    #[test]
    fn test_off_scale_score_is_unknown() {
        assert_eq!(passthrough_score(45.0), 0.0);
        assert_eq!(passthrough_score(-0.1), 0.0);
        assert_eq!(passthrough_score(f64::NAN), 0.0);
    }

    #[test]
    fn test_missing_values_become_zero() {
        let record = ExoplanetRecord::named("Sparse-1");
        let vector = NormalizedVector::from_record(&record);

        for property in NormalizedProperty::ALL {
            assert_eq!(vector.get(property), 0.0, "{:?}", property);
        }
    }

    #[test]
    fn test_missing_temperature_is_not_zero_kelvin() {
        // 0 K would score 0.424 on the curve; an unknown temperature scores 0
        let record = ExoplanetRecord::named("NoTemp");
        assert_eq!(normalize_property(&record, NormalizedProperty::Temperature), 0.0);
    }

    #[test]
    fn test_vector_from_record() {
        let record = ExoplanetRecord {
            pl_rade: Some(1.5),
            pl_bmasse: Some(5.0),
            pl_eqt: Some(288.0),
            surface_gravity: Some(12.0),
            habitability_score: Some(0.82),
            pl_water_probability: Some(0.4),
            esi: Some(0.9),
            ..ExoplanetRecord::named("Test-1 b")
        };
        let vector = NormalizedVector::from_record(&record);

        assert_eq!(vector.name, "Test-1 b");
        assert_relative_eq!(vector.size, 0.1, epsilon = 1e-12);
        assert_relative_eq!(vector.mass, 0.25, epsilon = 1e-12);
        assert_relative_eq!(vector.temperature, 1.0, epsilon = 1e-12);
        assert_eq!(vector.gravity, 1.0);
        assert_eq!(vector.habitability, 0.82);
        assert_eq!(vector.water, 0.4);
        assert_eq!(vector.esi, 0.9);
    }
}
