//! Exoplanet Comparison Engine
//!
//! Lists, filters and compares exoplanet records, and turns heterogeneous
//! physical quantities into comparable visual output.
//!
//! Module layout (leaf first):
//! - `record`: the exoplanet record and the comparable-property catalogue
//! - `utils/`: score types, color bands, normalization
//! - `data`: record store (CSV via Polars, archive JSON), pagination
//! - `filter`: name/habitability search
//! - `selection`: bounded comparison set
//! - `layout`: proportional size geometry
//! - `charts/`: radar, bar, scatter and habitability series
//! - `render/`: SVG output and presentation toggles
//! - `comparison`: host-facing view over all of the above
//! - `detail/`: single-record presentation
//! - `api_server`: HTTP surface (feature `api`)

pub mod record;
pub mod utils;
pub mod data;
pub mod filter;
pub mod selection;
pub mod layout;
pub mod charts;
pub mod render;
pub mod comparison;
pub mod detail;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use record::{ComparableProperty, ExoplanetRecord, property_label};
pub use utils::{band, ColorBand, ScoreScale, UnitScore, PercentScore, NormalizedVector};
pub use data::{RecordStore, SourceError, PageRequest, Page, Pagination, paginate};
pub use filter::{filter_records, RecordFilter};
pub use selection::{SelectionSet, MAX_SELECTION};
pub use layout::{layout_size_comparison, scale_factor, LayoutConfig, SizeComparison};
pub use render::{render_size_comparison, RenderConfig, Theme};
pub use comparison::{ActiveTab, ComparisonSnapshot, ComparisonView};
pub use detail::{DetailView, PlanetType};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState, ServerConfig};
