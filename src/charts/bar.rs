//! Bar chart: one raw (un-normalized) property across the selection

use serde::Serialize;

use crate::charts::series_color;
use crate::record::{ComparableProperty, ExoplanetRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub property: ComparableProperty,
    pub label: String,
    pub bars: Vec<BarPoint>,
}

/// Bars for `property`, labelled with the host-supplied `label`
///
/// Records without the property are left out; colors follow selection
/// order, so a planet keeps its radar color even when others are dropped.
pub fn bar_chart(records: &[ExoplanetRecord], property: ComparableProperty, label: &str) -> BarChart {
    let bars = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record
                .value(property)
                .filter(|v| v.is_finite())
                .map(|value| BarPoint {
                    name: record.pl_name.clone(),
                    value,
                    color: series_color(index),
                })
        })
        .collect();

    BarChart {
        property,
        label: label.to_string(),
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values_and_label() {
        let records = vec![
            ExoplanetRecord { pl_orbper: Some(112.3), ..ExoplanetRecord::named("Kepler-442 b") },
            ExoplanetRecord { pl_orbper: Some(6.1), ..ExoplanetRecord::named("TRAPPIST-1 e") },
        ];
        let chart = bar_chart(&records, ComparableProperty::OrbitalPeriod, "Orbital Period (days)");

        assert_eq!(chart.label, "Orbital Period (days)");
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].value, 112.3);
        assert_eq!(chart.bars[1].value, 6.1);
    }

    #[test]
    fn test_missing_values_dropped_colors_kept() {
        let records = vec![
            ExoplanetRecord::named("NoMass"),
            ExoplanetRecord { pl_bmasse: Some(5.0), ..ExoplanetRecord::named("Heavy") },
        ];
        let chart = bar_chart(&records, ComparableProperty::Mass, ComparableProperty::Mass.label());

        assert_eq!(chart.bars.len(), 1);
        assert_eq!(chart.bars[0].name, "Heavy");
        assert_eq!(chart.bars[0].color, "#10b981");
    }

    #[test]
    fn test_zero_is_a_value() {
        let records = vec![ExoplanetRecord { esi: Some(0.0), ..ExoplanetRecord::named("Zero") }];
        let chart = bar_chart(&records, ComparableProperty::Esi, "ESI");
        assert_eq!(chart.bars.len(), 1);
    }
}
