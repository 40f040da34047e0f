//! Rendering
//!
//! Stateless consumers of the layout and chart data. Presentation toggles
//! (theme, glow, animation, grid) come in through `RenderConfig`; renderers
//! hold no state and regenerate their whole output on every call.

pub mod svg;

use serde::{Deserialize, Serialize};

pub use svg::render_size_comparison;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Primary text color
    pub fn foreground(&self) -> &'static str {
        match self {
            Theme::Dark => "#f8fafc",
            Theme::Light => "#0f172a",
        }
    }

    /// Secondary text color (captions)
    pub fn muted(&self) -> &'static str {
        match self {
            Theme::Dark => "#94a3b8",
            Theme::Light => "#64748b",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Theme::Dark => "#020617",
            Theme::Light => "#ffffff",
        }
    }
}

/// Presentation toggles passed into every renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub theme: Theme,
    pub glow_effects: bool,
    pub animation: bool,
    pub background_grid: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            theme: Theme::Dark,
            glow_effects: true,
            animation: true,
            background_grid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"theme": "light", "animation": false}"#).unwrap();

        assert_eq!(config.theme, Theme::Light);
        assert!(!config.animation);
        assert!(config.glow_effects);
        assert!(config.background_grid);
    }
}
