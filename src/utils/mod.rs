//! Utility modules shared by the comparison engine
//!
//! - Scores: 0-1 / 0-100 score types
//! - Color bands: qualitative habitability bands
//! - Normalization: per-property scaling onto [0, 1]

pub mod scores;
pub mod color_bands;
pub mod normalization;

// Re-export commonly used types
pub use scores::{UnitScore, PercentScore};
pub use color_bands::{band, ColorBand, ScoreScale};
pub use normalization::{
    normalize, normalize_temperature, normalize_property, normalize_all,
    NormalizedProperty, NormalizedVector, Domain, Scaling,
};
