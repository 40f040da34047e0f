// HTTP API over the comparison engine
//
// Read-only endpoints share one immutable record store; comparison endpoints
// build a fresh ComparisonView per request from the posted names, so the
// server holds no per-user state.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::comparison::ComparisonView;
use crate::data::{archive_query_url, paginate, PageRequest, RecordStore, SourceError};
use crate::detail::DetailView;
use crate::filter::{filter_records, RecordFilter};
use crate::record::{ComparableProperty, ExoplanetRecord};
use crate::render::RenderConfig;

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub data_file: PathBuf,
    pub archive_url: String,
    pub port: u16,
    pub archive_cache_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            data_file: PathBuf::from("data/exoplanet_scores.csv"),
            archive_url: archive_query_url(),
            port: 3000,
            archive_cache_ttl: Duration::from_secs(300),
        }
    }
}

impl ServerConfig {
    /// Read `DATA_FILE`, `ARCHIVE_URL`, `PORT`, `ARCHIVE_CACHE_TTL_SECS`
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with a custom lookup; unparseable values fall back to defaults
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        ServerConfig {
            data_file: lookup("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            archive_url: lookup("ARCHIVE_URL").unwrap_or(defaults.archive_url),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            archive_cache_ttl: lookup("ARCHIVE_CACHE_TTL_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.archive_cache_ttl),
        }
    }
}

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Tabular store; `None` when the CSV file was not found at startup
    pub store: Option<Arc<RecordStore>>,
    pub http: reqwest::Client,
    pub archive_url: Arc<str>,
    /// Archive URL → full fetched record list
    pub archive_cache: Cache<String, Arc<RecordStore>>,
}

impl AppState {
    pub async fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        use anyhow::Context;

        tracing::info!("Loading record store from {}...", config.data_file.display());
        let store = match RecordStore::from_csv(&config.data_file) {
            Ok(store) => Some(store),
            Err(SourceError::NotFound(path)) => {
                tracing::warn!("CSV file not found: {} (data endpoints will 404)", path.display());
                None
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to load records from {}", config.data_file.display())
                })
            }
        };

        let http = reqwest::Client::builder()
            .user_agent(concat!("exoplanet_engine/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::from_parts(store, http, &config.archive_url, config.archive_cache_ttl))
    }

    pub fn from_parts(
        store: Option<RecordStore>,
        http: reqwest::Client,
        archive_url: &str,
        cache_ttl: Duration,
    ) -> Self {
        tracing::info!("Initializing Moka archive cache (TTL {}s)...", cache_ttl.as_secs());
        let archive_cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(cache_ttl)
            .build();

        AppState {
            store: store.map(Arc::new),
            http,
            archive_url: Arc::from(archive_url),
            archive_cache,
        }
    }

    fn store(&self) -> Result<&RecordStore, AppError> {
        self.store
            .as_deref()
            .ok_or_else(|| AppError::NotFound("CSV file not found".to_string()))
    }

    /// Full archive list, fetched once per cache TTL
    async fn archive(&self) -> Result<Arc<RecordStore>, AppError> {
        let url = self.archive_url.to_string();
        let client = self.http.clone();

        self.archive_cache
            .try_get_with(url.clone(), async move {
                RecordStore::fetch_archive(&client, &url).await.map(Arc::new)
            })
            .await
            .map_err(|e| {
                tracing::error!("Error fetching exoplanet data: {}", e);
                AppError::from_archive(&e)
            })
    }
}

// ============================================================================
// Router Setup
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Archive listing (paginated after full retrieval)
        .route("/api/exoplanets", get(list_exoplanets))

        // Tabular store
        // search must come before :pl_name
        .route("/api/data", get(get_all_data))
        .route("/api/data/search", get(search_data))
        .route("/api/data/:pl_name", get(get_detail))

        // Comparison
        .route("/api/compare", post(compare))
        .route("/api/compare/size.svg", post(compare_size_svg))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_exoplanets(
    State(state): State<AppState>,
    Query(request): Query<PageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (page, page_size) = request.resolve();
    let archive = state.archive().await?;

    Ok(Json(paginate(archive.records(), page, page_size)))
}

async fn get_all_data(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store()?;
    Ok(Json(store.records().to_vec()))
}

#[derive(Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    threshold: f64,
    count: usize,
    data: Vec<&'a ExoplanetRecord>,
}

async fn search_data(
    State(state): State<AppState>,
    Query(filter): Query<RecordFilter>,
) -> Result<impl IntoResponse, AppError> {
    if !filter.threshold.is_finite() || !(0.0..=1.0).contains(&filter.threshold) {
        return Err(AppError::Unprocessable(format!(
            "threshold must be between 0 and 1, got {}",
            filter.threshold
        )));
    }

    let store = state.store()?;
    let data = filter_records(store.records(), &filter.q, filter.threshold);

    let body = serde_json::to_value(SearchResponse {
        query: &filter.q,
        threshold: filter.threshold,
        count: data.len(),
        data,
    })
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(body))
}

#[derive(Serialize)]
struct DetailResponse<'a> {
    record: &'a ExoplanetRecord,
    detail: DetailView,
}

async fn get_detail(
    State(state): State<AppState>,
    Path(pl_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let store = state.store()?;
    let record = store
        .get(&pl_name)
        .ok_or_else(|| AppError::NotFound(format!("Exoplanet not found: {}", pl_name)))?;

    let body = serde_json::to_value(DetailResponse {
        record,
        detail: DetailView::from_record(record),
    })
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(body))
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub names: Vec<String>,
    /// Bar-chart property key (e.g. "pl_rade")
    pub property: Option<String>,
    /// Display label for the property; the catalogue label otherwise
    pub label: Option<String>,
    #[serde(default)]
    pub render: Option<RenderConfig>,
}

/// Fresh view with the named records added in order; unknown names are skipped
fn build_view(store: &RecordStore, request: &CompareRequest) -> Result<ComparisonView, AppError> {
    let mut view = ComparisonView::new();

    if let Some(key) = request.property.as_deref() {
        let property = ComparableProperty::from_key(key)
            .ok_or_else(|| AppError::Unprocessable(format!("Unknown property: {}", key)))?;
        view.set_property(property, request.label.clone());
    }
    if let Some(render) = request.render {
        view.render = render;
    }

    for name in &request.names {
        match store.get(name) {
            Some(record) => {
                view.on_add(record.clone());
            }
            None => tracing::debug!("Ignoring unknown planet '{}'", name),
        }
    }

    Ok(view)
}

async fn compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<impl IntoResponse, AppError> {
    let view = build_view(state.store()?, &request)?;
    Ok(Json(view.snapshot()))
}

async fn compare_size_svg(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<impl IntoResponse, AppError> {
    let view = build_view(state.store()?, &request)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], view.size_svg()))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unprocessable(String),
    Internal(String),
    Upstream(String),
}

impl AppError {
    /// Archive failures all show the same message; transport errors are 502
    fn from_archive(error: &SourceError) -> Self {
        let message = "Failed to fetch exoplanet data".to_string();
        match error {
            SourceError::Http(e) if e.is_decode() => AppError::Internal(message),
            SourceError::Http(_) | SourceError::Status(_) => AppError::Upstream(message),
            _ => AppError::Internal(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::from_vars(|_| None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_file, PathBuf::from("data/exoplanet_scores.csv"));
        assert_eq!(config.archive_cache_ttl, Duration::from_secs(300));
        assert!(config.archive_url.contains("pscomppars"));
    }

    #[test]
    fn test_config_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DATA_FILE", "/srv/scores.csv"),
            ("PORT", "8080"),
            ("ARCHIVE_CACHE_TTL_SECS", "not-a-number"),
        ]
        .into_iter()
        .collect();
        let config = ServerConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.data_file, PathBuf::from("/srv/scores.csv"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.archive_cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_archive_error_mapping() {
        assert!(matches!(
            AppError::from_archive(&SourceError::Status(503)),
            AppError::Upstream(_)
        ));
        assert!(matches!(
            AppError::from_archive(&SourceError::MissingColumn("pl_name".into())),
            AppError::Internal(_)
        ));
    }
}
