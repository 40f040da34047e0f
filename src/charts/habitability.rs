//! Habitability score chart: grouped percentage bars per planet
//!
//! This is a display boundary, so scores leave the engine here as
//! `PercentScore`.

use serde::Serialize;

use crate::record::ExoplanetRecord;
use crate::utils::scores::PercentScore;

/// The four score series, in legend order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSeries {
    Habitability,
    Esi,
    Water,
    Terraformability,
}

impl ScoreSeries {
    pub const ALL: [ScoreSeries; 4] = [
        ScoreSeries::Habitability,
        ScoreSeries::Esi,
        ScoreSeries::Water,
        ScoreSeries::Terraformability,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScoreSeries::Habitability => "Habitability",
            ScoreSeries::Esi => "Earth Similarity",
            ScoreSeries::Water => "Water Probability",
            ScoreSeries::Terraformability => "Terraformability",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreSeries::Habitability => "#10b981",
            ScoreSeries::Esi => "#3b82f6",
            ScoreSeries::Water => "#06b6d4",
            ScoreSeries::Terraformability => "#8b5cf6",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitabilityGroup {
    pub name: String,
    pub habitability: PercentScore,
    pub esi: PercentScore,
    pub water: PercentScore,
    pub terraformability: PercentScore,
}

impl HabitabilityGroup {
    pub fn get(&self, series: ScoreSeries) -> PercentScore {
        match series {
            ScoreSeries::Habitability => self.habitability,
            ScoreSeries::Esi => self.esi,
            ScoreSeries::Water => self.water,
            ScoreSeries::Terraformability => self.terraformability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitabilityChart {
    pub y_label: &'static str,
    pub groups: Vec<HabitabilityGroup>,
}

/// One group per selected record; missing scores show as 0%
pub fn habitability_chart(records: &[ExoplanetRecord]) -> HabitabilityChart {
    let groups = records
        .iter()
        .map(|record| HabitabilityGroup {
            name: record.pl_name.clone(),
            habitability: record.habitability().to_percent(),
            esi: record.esi_score().to_percent(),
            water: record.water_probability().to_percent(),
            terraformability: record.terraformability().to_percent(),
        })
        .collect();

    HabitabilityChart {
        y_label: "Score (%)",
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scores_as_percent() {
        let records = vec![ExoplanetRecord {
            habitability_score: Some(0.84),
            esi: Some(0.5),
            pl_water_probability: Some(0.25),
            ..ExoplanetRecord::named("Kepler-442 b")
        }];
        let chart = habitability_chart(&records);
        let group = &chart.groups[0];

        assert_relative_eq!(group.habitability.value(), 84.0, epsilon = 1e-9);
        assert_relative_eq!(group.get(ScoreSeries::Esi).value(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(group.water.value(), 25.0, epsilon = 1e-9);
        assert_eq!(group.terraformability.value(), 0.0);
    }

    #[test]
    fn test_series_colors() {
        let colors: Vec<&str> = ScoreSeries::ALL.iter().map(|s| s.color()).collect();
        assert_eq!(colors, vec!["#10b981", "#3b82f6", "#06b6d4", "#8b5cf6"]);
    }
}
