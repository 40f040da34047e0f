//! Search Filtering
//!
//! Derives the visible subset of the record list from a name query and a
//! minimum habitability. Pure: same inputs, same output, source order kept.

use serde::Deserialize;

use crate::record::ExoplanetRecord;

/// Search parameters as they arrive from the host (`?q=&threshold=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordFilter {
    /// Case-insensitive substring of `pl_name`; empty matches everything
    #[serde(default, alias = "query")]
    pub q: String,

    /// Minimum habitability on the 0-1 scale; 0 disables the check
    #[serde(default)]
    pub threshold: f64,
}

impl RecordFilter {
    pub fn new(query: impl Into<String>, threshold: f64) -> Self {
        RecordFilter {
            q: query.into(),
            threshold,
        }
    }

    pub fn matches(&self, record: &ExoplanetRecord) -> bool {
        matches_query(record, &self.q.to_lowercase()) && meets_threshold(record, self.threshold)
    }

    pub fn apply<'a>(&self, records: &'a [ExoplanetRecord]) -> Vec<&'a ExoplanetRecord> {
        filter_records(records, &self.q, self.threshold)
    }
}

/// `query_lower` must already be lowercased
fn matches_query(record: &ExoplanetRecord, query_lower: &str) -> bool {
    query_lower.is_empty() || record.pl_name.to_lowercase().contains(query_lower)
}

/// Unknown habitability counts as 0, so any positive threshold excludes it
fn meets_threshold(record: &ExoplanetRecord, threshold: f64) -> bool {
    if !(threshold > 0.0) {
        return true;
    }
    record.habitability().value() >= threshold
}

/// Records whose name contains `query` (case-insensitive) and whose
/// habitability is at least `threshold`
///
/// # Arguments
/// * `records` - Full candidate list, in display order
/// * `query` - Name substring; empty string matches all
/// * `threshold` - 0-1 habitability floor; 0 (or NaN) disables it
pub fn filter_records<'a>(
    records: &'a [ExoplanetRecord],
    query: &str,
    threshold: f64,
) -> Vec<&'a ExoplanetRecord> {
    let query_lower = query.to_lowercase();

    let visible: Vec<&ExoplanetRecord> = records
        .iter()
        .filter(|r| matches_query(r, &query_lower) && meets_threshold(r, threshold))
        .collect();

    tracing::debug!(
        "Filter q='{}' threshold={} -> {}/{} records",
        query,
        threshold,
        visible.len(),
        records.len()
    );

    visible
}
