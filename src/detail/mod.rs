//! Record Detail Presentation
//!
//! Everything the single-planet page shows: type classification, labelled
//! and formatted fields grouped by section, a narrative summary and the
//! search-card hints.

pub mod classify;
pub mod format;
pub mod summary;

use serde::Serialize;
use serde_json::Value;

use crate::record::ExoplanetRecord;
use crate::utils::color_bands::ColorBand;
use crate::utils::scores::PercentScore;

pub use classify::PlanetType;
pub use format::{field_label, format_number, format_optional, format_value, UNKNOWN};
pub use summary::{planet_summary, CardHints};

/// Section a field is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldGroup {
    Planet,
    Star,
    System,
    Habitability,
    Other,
}

impl FieldGroup {
    /// Group by key prefix; the name column is shown in the header instead
    pub fn for_key(key: &str) -> Option<FieldGroup> {
        if key == "pl_name" {
            None
        } else if key.starts_with("pl_") {
            Some(FieldGroup::Planet)
        } else if key.starts_with("st_") {
            Some(FieldGroup::Star)
        } else if key.starts_with("sy_") {
            Some(FieldGroup::System)
        } else if key.contains("hab") || key.contains("terra") || key.contains("score") {
            Some(FieldGroup::Habitability)
        } else {
            Some(FieldGroup::Other)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailField {
    pub key: String,
    pub label: String,
    pub value: Value,
    pub display: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailGroups {
    pub planet: Vec<DetailField>,
    pub star: Vec<DetailField>,
    pub system: Vec<DetailField>,
    pub habitability: Vec<DetailField>,
    pub other: Vec<DetailField>,
}

impl DetailGroups {
    fn push(&mut self, group: FieldGroup, field: DetailField) {
        match group {
            FieldGroup::Planet => self.planet.push(field),
            FieldGroup::Star => self.star.push(field),
            FieldGroup::System => self.system.push(field),
            FieldGroup::Habitability => self.habitability.push(field),
            FieldGroup::Other => self.other.push(field),
        }
    }
}

/// Detail page model for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub name: String,
    pub planet_type: PlanetType,
    pub type_badge_class: &'static str,
    pub habitability: PercentScore,
    pub habitability_band: ColorBand,
    pub summary: String,
    pub groups: DetailGroups,
    pub card: CardHints,
}

impl DetailView {
    pub fn from_record(record: &ExoplanetRecord) -> Self {
        let planet_type = PlanetType::from_radius(record.pl_rade);
        let habitability = record.habitability();

        let mut groups = DetailGroups::default();
        for (key, value) in record_fields(record) {
            if let Some(group) = FieldGroup::for_key(&key) {
                groups.push(
                    group,
                    DetailField {
                        label: field_label(&key),
                        display: format_value(&key, &value),
                        key,
                        value,
                    },
                );
            }
        }

        DetailView {
            name: record.pl_name.clone(),
            planet_type,
            type_badge_class: planet_type.badge_class(),
            habitability: habitability.to_percent(),
            habitability_band: habitability.band(),
            summary: planet_summary(record),
            groups,
            card: CardHints::from_record(record),
        }
    }
}

/// Every column of a record as `(key, value)`, typed fields first
///
/// Unknown measurements are kept as `Value::Null` so they display as
/// "Unknown" rather than vanishing.
pub fn record_fields(record: &ExoplanetRecord) -> Vec<(String, Value)> {
    fn num(v: Option<f64>) -> Value {
        v.map(Value::from).unwrap_or(Value::Null)
    }

    let mut fields = vec![
        ("pl_name".to_string(), Value::from(record.pl_name.clone())),
        ("pl_rade".to_string(), num(record.pl_rade)),
        ("pl_bmasse".to_string(), num(record.pl_bmasse)),
        ("pl_orbper".to_string(), num(record.pl_orbper)),
        ("pl_eqt".to_string(), num(record.pl_eqt)),
        ("pl_water_probability".to_string(), num(record.pl_water_probability)),
        ("st_teff".to_string(), num(record.st_teff)),
        ("st_mass".to_string(), num(record.st_mass)),
        ("st_rad".to_string(), num(record.st_rad)),
        ("st_met".to_string(), num(record.st_met)),
        ("sy_dist".to_string(), num(record.sy_dist)),
        ("disc_year".to_string(), record.disc_year.map(Value::from).unwrap_or(Value::Null)),
        (
            "disc_facility".to_string(),
            record.disc_facility.clone().map(Value::from).unwrap_or(Value::Null),
        ),
        ("habitability_score".to_string(), num(record.habitability_score)),
        ("terraformability_score".to_string(), num(record.terraformability_score)),
        ("ESI".to_string(), num(record.esi)),
        ("surface_gravity".to_string(), num(record.surface_gravity)),
    ];

    fields.extend(record.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    fields
}
