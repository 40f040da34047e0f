//! Radar chart: one polygon per selected planet over six normalized axes

use serde::Serialize;

use crate::charts::series_color;
use crate::record::ExoplanetRecord;
use crate::utils::normalization::{NormalizedProperty, NormalizedVector};

/// Axes in drawing order; every value is on [0, 1]
pub const RADAR_AXES: [NormalizedProperty; 6] = [
    NormalizedProperty::Size,
    NormalizedProperty::Mass,
    NormalizedProperty::Temperature,
    NormalizedProperty::Gravity,
    NormalizedProperty::Habitability,
    NormalizedProperty::Water,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub key: NormalizedProperty,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub name: String,
    pub color: &'static str,
    /// One value per axis, same order as `RadarChart::axes`
    pub values: Vec<f64>,
}

/// Values of one axis across all series (row-major view for table renderers)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarRow {
    pub property: &'static str,
    pub values: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub axes: Vec<RadarAxis>,
    pub series: Vec<RadarSeries>,
    pub domain: [f64; 2],
}

impl RadarChart {
    pub fn rows(&self) -> Vec<RadarRow> {
        self.axes
            .iter()
            .enumerate()
            .map(|(i, axis)| RadarRow {
                property: axis.label,
                values: self
                    .series
                    .iter()
                    .map(|s| (s.name.clone(), s.values[i]))
                    .collect(),
            })
            .collect()
    }
}

/// Build the radar chart from selected records
///
/// Missing measurements were already mapped to 0 by normalization, so every
/// selected record gets a polygon.
pub fn radar_chart(records: &[ExoplanetRecord]) -> RadarChart {
    let series = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let vector = NormalizedVector::from_record(record);
            RadarSeries {
                name: record.pl_name.clone(),
                color: series_color(index),
                values: RADAR_AXES.iter().map(|&axis| vector.get(axis)).collect(),
            }
        })
        .collect();

    RadarChart {
        axes: RADAR_AXES
            .iter()
            .map(|&key| RadarAxis { key, label: key.label() })
            .collect(),
        series,
        domain: [0.0, 1.0],
    }
}
