//! Field labels and value formatting for the detail view

use serde_json::Value;

/// Shown wherever a measurement is missing
pub const UNKNOWN: &str = "Unknown";

/// Human-readable label for a column key
///
/// Known columns use a fixed name; anything else is derived from the key
/// (`pl_` dropped, `st_` → "Star ", `sy_` → "System ", underscores to
/// spaces, each word capitalised).
pub fn field_label(key: &str) -> String {
    let fixed = match key {
        "pl_name" => Some("Planet Name"),
        "pl_rade" => Some("Planet Radius"),
        "pl_bmasse" => Some("Planet Mass"),
        "pl_orbper" => Some("Orbital Period"),
        "pl_eqt" => Some("Equilibrium Temperature"),
        "st_teff" => Some("Star Temperature"),
        "st_mass" => Some("Star Mass"),
        "st_rad" => Some("Star Radius"),
        "st_met" => Some("Star Metallicity"),
        "sy_dist" => Some("Distance from Earth"),
        "disc_year" => Some("Discovery Year"),
        "disc_facility" => Some("Discovery Facility"),
        "habitability_score" => Some("Habitability Score"),
        "terraformability_score" => Some("Terraformability Score"),
        _ => None,
    };
    if let Some(label) = fixed {
        return label.to_string();
    }

    let derived = key
        .replacen("pl_", "", 1)
        .replacen("st_", "Star ", 1)
        .replacen("sy_", "System ", 1)
        .replace('_', " ");
    capitalize_words(&derived)
}

/// Upper-case the first letter of every word, leaving the rest untouched
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}

/// Display string for a numeric value of `key`, with its unit
pub fn format_number(key: &str, value: f64) -> String {
    match key {
        "pl_rade" => format!("{:.2} R⊕", value),
        "pl_bmasse" => format!("{:.2} M⊕", value),
        "pl_orbper" => format!("{:.1} days", value),
        "pl_eqt" | "st_teff" => format!("{:.0} K", value),
        "st_mass" => format!("{:.2} M☉", value),
        "st_rad" => format!("{:.2} R☉", value),
        "sy_dist" => format!("{:.1} light years", value),
        "ESI" => format!("{:.0}%", value * 100.0),
        k if k.contains("score") || k.contains("probability") => format!("{:.0}%", value * 100.0),
        _ => trim_number(value),
    }
}

/// Display string for any cell; null becomes "Unknown"
pub fn format_value(key: &str, value: &Value) -> String {
    match value {
        Value::Null => UNKNOWN.to_string(),
        Value::Number(n) => match n.as_i64() {
            // Integer cells (years, counts) print without decimals unless the key has a unit
            Some(i) if !has_unit(key) => i.to_string(),
            _ => n.as_f64().map(|v| format_number(key, v)).unwrap_or_else(|| n.to_string()),
        },
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Same as `format_value` for an optional number
pub fn format_optional(key: &str, value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_number(key, v),
        _ => UNKNOWN.to_string(),
    }
}

fn has_unit(key: &str) -> bool {
    matches!(
        key,
        "pl_rade" | "pl_bmasse" | "pl_orbper" | "pl_eqt" | "st_teff" | "st_mass" | "st_rad" | "sy_dist" | "ESI"
    ) || key.contains("score")
        || key.contains("probability")
}

/// Shortest plain rendering: integers without a fraction, others as-is
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed_labels() {
        assert_eq!(field_label("pl_rade"), "Planet Radius");
        assert_eq!(field_label("sy_dist"), "Distance from Earth");
        assert_eq!(field_label("disc_facility"), "Discovery Facility");
    }

    #[test]
    fn test_derived_labels() {
        assert_eq!(field_label("pl_orbeccen"), "Orbeccen");
        assert_eq!(field_label("st_spectype"), "Star Spectype");
        assert_eq!(field_label("sy_pnum"), "System Pnum");
        assert_eq!(field_label("pl_water_probability"), "Water Probability");
        assert_eq!(field_label("surface_gravity"), "Surface Gravity");
    }

    #[test]
    fn test_units() {
        assert_eq!(format_number("pl_rade", 1.234), "1.23 R⊕");
        assert_eq!(format_number("pl_bmasse", 5.0), "5.00 M⊕");
        assert_eq!(format_number("pl_orbper", 112.305), "112.3 days");
        assert_eq!(format_number("pl_eqt", 233.4), "233 K");
        assert_eq!(format_number("st_teff", 4402.0), "4402 K");
        assert_eq!(format_number("st_mass", 0.61), "0.61 M☉");
        assert_eq!(format_number("st_rad", 0.6), "0.60 R☉");
        assert_eq!(format_number("sy_dist", 370.46), "370.5 light years");
    }

    #[test]
    fn test_scores_as_percent() {
        assert_eq!(format_number("habitability_score", 0.84), "84%");
        assert_eq!(format_number("pl_water_probability", 0.3), "30%");
        assert_eq!(format_number("ESI", 0.73), "73%");
    }

    #[test]
    fn test_format_value_kinds() {
        assert_eq!(format_value("pl_rade", &Value::Null), "Unknown");
        assert_eq!(format_value("disc_year", &json!(2015)), "2015");
        assert_eq!(format_value("pl_eqt", &json!(233)), "233 K");
        assert_eq!(format_value("disc_facility", &json!("Kepler")), "Kepler");
        assert_eq!(format_value("sy_pnum", &json!(3.0)), "3");
        assert_eq!(format_value("pl_orbeccen", &json!(0.09)), "0.09");
        assert_eq!(format_optional("pl_bmasse", None), "Unknown");
    }
}
