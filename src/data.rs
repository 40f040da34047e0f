//! Record Source and Storage
//!
//! Loads exoplanet records from the scored CSV export (via Polars) or from
//! the exoplanet archive's TAP endpoint (JSON), and holds them read-only for
//! the rest of the session.
//!
//! Loading is a single best-effort attempt: no retry, no partial results.
//! Any failure comes back as one `SourceError` whose message is what the
//! host shows.

use polars::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::record::ExoplanetRecord;

// ============================================================================
// Errors
// ============================================================================

/// Failure while reading or fetching the record list
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("CSV file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read record source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record source has no '{0}' column")]
    MissingColumn(String),

    #[cfg(feature = "archive")]
    #[error("archive request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("archive responded with HTTP {0}")]
    Status(u16),
}

// ============================================================================
// Column Layout
// ============================================================================

/// Columns requested from the archive's `pscomppars` table
pub const ARCHIVE_COLUMNS: [&str; 9] = [
    "pl_name", "pl_rade", "pl_bmasse", "pl_orbper", "pl_eqt",
    "st_teff", "st_mass", "st_rad", "st_met",
];

/// Columns mapped onto typed `ExoplanetRecord` fields; all others go to `extra`
const TYPED_COLUMNS: [&str; 17] = [
    "pl_name", "pl_rade", "pl_bmasse", "pl_orbper", "pl_eqt",
    "st_teff", "st_mass", "st_rad", "st_met", "sy_dist",
    "disc_year", "disc_facility",
    "habitability_score", "terraformability_score", "ESI",
    "pl_water_probability", "surface_gravity",
];

pub const ARCHIVE_TAP_ENDPOINT: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";

/// TAP sync URL selecting `ARCHIVE_COLUMNS` from `pscomppars` as JSON
#[cfg(feature = "archive")]
pub fn archive_query_url() -> String {
    let query = format!("select {} from pscomppars", ARCHIVE_COLUMNS.join(","));
    format!(
        "{}?query={}&format=json",
        ARCHIVE_TAP_ENDPOINT,
        urlencoding::encode(&query)
    )
}

// ============================================================================
// Record Store
// ============================================================================

/// Immutable list of records plus a name index
///
/// Order is the source order; the filter engine and pagination preserve it.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ExoplanetRecord>,
    by_name: FxHashMap<String, usize>,
}

impl RecordStore {
    /// Build a store, dropping unnamed rows and repeated names (first wins)
    ///
    /// Scores off the 0-1 scale are discarded (left unknown) here, once, so
    /// nothing downstream ever sees them.
    pub fn new(records: Vec<ExoplanetRecord>) -> Self {
        let mut kept = Vec::with_capacity(records.len());
        let mut by_name = FxHashMap::default();
        let mut discarded = 0;

        for mut record in records {
            if record.pl_name.trim().is_empty() {
                tracing::warn!("Skipping record without pl_name");
                continue;
            }
            if by_name.contains_key(&record.pl_name) {
                tracing::warn!("Skipping duplicate record '{}'", record.pl_name);
                continue;
            }
            discarded += record.discard_invalid_scores();
            by_name.insert(record.pl_name.clone(), kept.len());
            kept.push(record);
        }

        if discarded > 0 {
            tracing::warn!("Discarded {} off-scale score values", discarded);
        }

        RecordStore { records: kept, by_name }
    }

    /// Load the scored CSV export
    ///
    /// Schema inference scans the whole file so sparse numeric columns are
    /// not mistaken for strings. Numeric-looking cells become numbers, every
    /// other non-empty cell stays a string.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(path.into()))?
            .finish()?;

        let store = Self::new(Self::records_from_dataframe(&df)?);
        tracing::info!("Loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse an archive-style JSON array of flat objects
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let records: Vec<ExoplanetRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Fetch the full record list from the archive
    ///
    /// One GET, no retry. Non-2xx responses become `SourceError::Status`.
    #[cfg(feature = "archive")]
    pub async fn fetch_archive(client: &reqwest::Client, url: &str) -> Result<Self, SourceError> {
        tracing::info!("Fetching exoplanet archive: {}", url);

        let response = client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let records: Vec<ExoplanetRecord> = response.json().await?;
        let store = Self::new(records);
        tracing::info!("Fetched {} archive records", store.len());
        Ok(store)
    }

    fn records_from_dataframe(df: &DataFrame) -> Result<Vec<ExoplanetRecord>, SourceError> {
        let n_rows = df.height();

        // All-numeric names are read as numbers; compare them as text
        let name_column = df
            .column("pl_name")
            .map_err(|_| SourceError::MissingColumn("pl_name".to_string()))?
            .cast(&DataType::String)?;
        let names = name_column.str()?;

        // f64 column; integer and mixed columns are cast, unparseable cells become null
        macro_rules! get_col {
            ($name:expr) => {{
                df.column($name).ok().and_then(|c| {
                    if let Ok(f) = c.f64() {
                        return Some(f.clone());
                    }
                    let cast = c.cast(&DataType::Float64).ok()?;
                    Some(cast.f64().ok()?.clone())
                })
            }};
        }

        macro_rules! get_val {
            ($col:expr, $i:expr) => {
                $col.as_ref().and_then(|c| c.get($i))
            };
        }

        macro_rules! get_str_col {
            ($name:expr) => {
                df.column($name).ok().and_then(|c| c.str().ok())
            };
        }

        let pl_rade = get_col!("pl_rade");
        let pl_bmasse = get_col!("pl_bmasse");
        let pl_orbper = get_col!("pl_orbper");
        let pl_eqt = get_col!("pl_eqt");
        let st_teff = get_col!("st_teff");
        let st_mass = get_col!("st_mass");
        let st_rad = get_col!("st_rad");
        let st_met = get_col!("st_met");
        let sy_dist = get_col!("sy_dist");
        let disc_year = get_col!("disc_year");
        let disc_facility = get_str_col!("disc_facility");
        let habitability = get_col!("habitability_score");
        let terraformability = get_col!("terraformability_score");
        let esi = get_col!("ESI");
        let water = get_col!("pl_water_probability");
        let gravity = get_col!("surface_gravity");

        let extra_columns: Vec<&Column> = df
            .get_columns()
            .iter()
            .filter(|c| !TYPED_COLUMNS.contains(&c.name().as_str()))
            .collect();

        let mut records = Vec::with_capacity(n_rows);
        for i in 0..n_rows {
            let Some(name) = names.get(i) else {
                tracing::warn!("Skipping CSV row {} without pl_name", i + 1);
                continue;
            };

            let mut extra = BTreeMap::new();
            for column in &extra_columns {
                if let Some(value) = column.get(i).ok().and_then(any_value_to_json) {
                    extra.insert(column.name().to_string(), value);
                }
            }

            records.push(ExoplanetRecord {
                pl_name: name.to_string(),
                pl_rade: get_val!(pl_rade, i),
                pl_bmasse: get_val!(pl_bmasse, i),
                pl_orbper: get_val!(pl_orbper, i),
                pl_eqt: get_val!(pl_eqt, i),
                st_teff: get_val!(st_teff, i),
                st_mass: get_val!(st_mass, i),
                st_rad: get_val!(st_rad, i),
                st_met: get_val!(st_met, i),
                sy_dist: get_val!(sy_dist, i),
                disc_year: get_val!(disc_year, i).map(|y| y as i64),
                disc_facility: disc_facility.and_then(|c| c.get(i)).map(|s| s.to_string()),
                habitability_score: get_val!(habitability, i),
                terraformability_score: get_val!(terraformability, i),
                esi: get_val!(esi, i),
                pl_water_probability: get_val!(water, i),
                surface_gravity: get_val!(gravity, i),
                extra,
            });
        }

        Ok(records)
    }

    pub fn get(&self, name: &str) -> Option<&ExoplanetRecord> {
        self.by_name.get(name).map(|&idx| &self.records[idx])
    }

    pub fn records(&self) -> &[ExoplanetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Cell value for the `extra` map; nulls are dropped
fn any_value_to_json(value: AnyValue) -> Option<Value> {
    match value {
        AnyValue::Null => None,
        AnyValue::Boolean(b) => Some(Value::Bool(b)),
        AnyValue::String(s) => Some(Value::String(s.to_string())),
        AnyValue::StringOwned(s) => Some(Value::String(s.to_string())),
        AnyValue::Int32(v) => Some(Value::from(v)),
        AnyValue::Int64(v) => Some(Value::from(v)),
        other => match other.extract::<f64>() {
            Some(v) if v.is_finite() => Some(Value::from(v)),
            Some(_) => None,
            None => Some(Value::String(other.to_string())),
        },
    }
}

// ============================================================================
// Pagination
// ============================================================================

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

/// Raw `page` / `pageSize` query parameters
///
/// Kept as strings: anything that does not parse to a valid value falls
/// back to the default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl PageRequest {
    /// Page number (>= 1) and page size (1..=100)
    pub fn resolve(&self) -> (usize, usize) {
        let page = self
            .page
            .as_deref()
            .and_then(leading_integer)
            .filter(|&p| p > 0)
            .unwrap_or(1);

        let page_size = self
            .page_size
            .as_deref()
            .and_then(leading_integer)
            .filter(|&s| s > 0 && s <= MAX_PAGE_SIZE)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        (page, page_size)
    }
}

/// Leading decimal digits of a parameter: `"2.5"` is 2, `"3abc"` is 3
///
/// Negative and digit-less values give `None`.
fn leading_integer(raw: &str) -> Option<usize> {
    let raw = raw.trim_start();
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Slice one page out of a fully retrieved list
///
/// Pages past the end come back empty with the totals still filled in.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    tracing::debug!("Paginating {} items: page {} of {}", total_items, page, total_pages);

    Page {
        data: items[start..end].to_vec(),
        pagination: Pagination {
            page,
            page_size,
            total_items,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_csv() {
        let file = write_csv(
            "pl_name,pl_rade,pl_eqt,disc_year,disc_facility,habitability_score,ESI,st_spectype\n\
             Kepler-442 b,1.34,233,2015,Kepler,0.84,0.84,K5\n\
             TRAPPIST-1 e,0.92,,2017,TRAPPIST,0.78,0.85,M8\n",
        );

        let store = RecordStore::from_csv(file.path()).unwrap();
        assert_eq!(store.len(), 2);

        let kepler = store.get("Kepler-442 b").unwrap();
        assert_eq!(kepler.pl_rade, Some(1.34));
        assert_eq!(kepler.pl_eqt, Some(233.0));
        assert_eq!(kepler.disc_year, Some(2015));
        assert_eq!(kepler.disc_facility.as_deref(), Some("Kepler"));
        assert_eq!(kepler.esi, Some(0.84));
        assert_eq!(kepler.extra.get("st_spectype").and_then(Value::as_str), Some("K5"));

        let trappist = store.get("TRAPPIST-1 e").unwrap();
        assert_eq!(trappist.pl_eqt, None);
        assert_eq!(trappist.pl_bmasse, None);
    }

    #[test]
    fn test_csv_order_preserved() {
        let file = write_csv("pl_name,pl_rade\nB,1.0\nA,2.0\nC,3.0\n");
        let store = RecordStore::from_csv(file.path()).unwrap();
        let names: Vec<&str> = store.records().iter().map(|r| r.pl_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_numeric_extra_columns_are_numbers() {
        let file = write_csv("pl_name,sy_pnum,pl_orbeccen\nK2-18 b,2,0.09\n");
        let store = RecordStore::from_csv(file.path()).unwrap();
        let record = store.get("K2-18 b").unwrap();

        assert_eq!(record.extra.get("sy_pnum").and_then(Value::as_i64), Some(2));
        assert_eq!(record.numeric_field("pl_orbeccen"), Some(0.09));
    }

    #[test]
    fn test_missing_file() {
        let err = RecordStore::from_csv("/nonexistent/exoplanets.csv").unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
        assert!(err.to_string().starts_with("CSV file not found"));
    }

    #[test]
    fn test_missing_name_column() {
        let file = write_csv("name,pl_rade\nEarth,1.0\n");
        let err = RecordStore::from_csv(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::MissingColumn(ref c) if c == "pl_name"));
    }

    #[test]
    fn test_numeric_names_read_as_text() {
        let file = write_csv("pl_name,pl_rade\n42,1.0\n7,2.0\n");
        let store = RecordStore::from_csv(file.path()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("42").unwrap().pl_rade, Some(1.0));
        assert_eq!(store.get("7").unwrap().pl_rade, Some(2.0));
    }

    #[test]
    fn test_percent_scale_scores_become_unknown() {
        let json = r#"[
            {"pl_name": "Percent-1", "habitability_score": 45.0, "ESI": 0.8},
            {"pl_name": "Unit-1", "habitability_score": 0.45, "pl_water_probability": 80}
        ]"#;
        let store = RecordStore::from_json_str(json).unwrap();

        let percent = store.get("Percent-1").unwrap();
        assert_eq!(percent.habitability_score, None);
        assert_eq!(percent.esi, Some(0.8));
        assert_eq!(percent.habitability().band(), crate::utils::ColorBand::Red);
        assert!(crate::filter::filter_records(store.records(), "", 0.99).is_empty());

        let unit = store.get("Unit-1").unwrap();
        assert_eq!(unit.habitability_score, Some(0.45));
        assert_eq!(unit.pl_water_probability, None);
    }

    #[test]
    fn test_duplicates_first_wins() {
        let store = RecordStore::new(vec![
            ExoplanetRecord { pl_rade: Some(1.0), ..ExoplanetRecord::named("Dup") },
            ExoplanetRecord { pl_rade: Some(9.0), ..ExoplanetRecord::named("Dup") },
            ExoplanetRecord::named(""),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Dup").unwrap().pl_rade, Some(1.0));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"pl_name": "TOI-700 d", "pl_rade": 1.19, "pl_bmasse": null, "st_teff": 3480},
            {"pl_name": "LHS 1140 b", "pl_rade": 1.73, "pl_bmasse": 6.98}
        ]"#;
        let store = RecordStore::from_json_str(json).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("TOI-700 d").unwrap().st_teff, Some(3480.0));
        assert!(RecordStore::from_json_str("{not json").is_err());
    }

    #[cfg(feature = "archive")]
    #[test]
    fn test_archive_url() {
        let url = archive_query_url();
        assert!(url.starts_with(ARCHIVE_TAP_ENDPOINT));
        assert!(url.contains("pl_name%2Cpl_rade"));
        assert!(url.contains("pscomppars"));
        assert!(url.ends_with("&format=json"));
    }

    #[test]
    fn test_page_request_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.resolve(), (1, 20));

        let req = PageRequest { page: Some("0".into()), page_size: Some("101".into()) };
        assert_eq!(req.resolve(), (1, 20));

        let req = PageRequest { page: Some("abc".into()), page_size: Some("-5".into()) };
        assert_eq!(req.resolve(), (1, 20));

        let req = PageRequest { page: Some("3".into()), page_size: Some("100".into()) };
        assert_eq!(req.resolve(), (3, 100));
    }

    #[test]
    fn test_page_request_reads_leading_digits() {
        let req = PageRequest { page: Some("2.5".into()), page_size: Some("15rows".into()) };
        assert_eq!(req.resolve(), (2, 15));

        let req = PageRequest { page: Some(" 3abc".into()), page_size: Some("+10".into()) };
        assert_eq!(req.resolve(), (3, 10));

        let req = PageRequest { page: Some(".5".into()), page_size: Some("-5".into()) };
        assert_eq!(req.resolve(), (1, 20));
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=45).collect();

        let first = paginate(&items, 1, 20);
        assert_eq!(first.data.len(), 20);
        assert_eq!(first.pagination.total_pages, 3);
        assert!(first.pagination.has_next_page);
        assert!(!first.pagination.has_prev_page);

        let last = paginate(&items, 3, 20);
        assert_eq!(last.data, vec![41, 42, 43, 44, 45]);
        assert!(!last.pagination.has_next_page);
        assert!(last.pagination.has_prev_page);

        let beyond = paginate(&items, 9, 20);
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.pagination.total_items, 45);
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let page = paginate(&[1, 2, 3], 1, 2);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pagination"]["pageSize"], 2);
        assert_eq!(json["pagination"]["totalItems"], 3);
        assert_eq!(json["pagination"]["hasNextPage"], true);
    }
}
