//! Proportional Size Layout
//!
//! Pure geometry for the "how big is it next to Earth" diagram. Earth is
//! always drawn at a fixed position and size; selected planets are sorted
//! largest-first and laid out left to right after a separator, all sharing
//! one scale factor so the largest fits inside the pixel budget.
//!
//! Drawing lives in `render::svg`; nothing here touches output formats.

use serde::Serialize;

use crate::record::ExoplanetRecord;
use crate::utils::color_bands::ColorBand;

// ============================================================================
// Configuration
// ============================================================================

/// Canvas dimensions and layout constants (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub base_size: f64,        // Pixel radius of 1 Earth radius (and of the Earth reference)
    pub pixel_budget: f64,     // Largest planet radius never exceeds this
    pub earth_x: f64,
    pub separator_x: f64,
    pub separator_margin: f64, // Separator runs from margin to height - margin
    pub start_x: f64,
    pub spacing: f64,
    pub name_offset: f64,      // Below the circle's bottom edge
    pub caption_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            width: 800.0,
            height: 400.0,
            base_size: 30.0,
            pixel_budget: 200.0,
            earth_x: 50.0,
            separator_x: 70.0,
            separator_margin: 40.0,
            start_x: 80.0,
            spacing: 20.0,
            name_offset: 16.0,
            caption_offset: 30.0,
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// One circle on the canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedBody {
    pub name: String,
    pub real_radius: f64, // Earth radii
    pub radius_px: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Habitability band; `None` for the Earth reference
    pub band: Option<ColorBand>,
    pub name_label: Label,
    pub caption: Label,
}

impl PlacedBody {
    fn new(
        name: &str,
        real_radius: f64,
        radius_px: f64,
        center_x: f64,
        center_y: f64,
        band: Option<ColorBand>,
        config: &LayoutConfig,
    ) -> Self {
        let bottom = center_y + radius_px;
        PlacedBody {
            name: name.to_string(),
            real_radius,
            radius_px,
            center_x,
            center_y,
            band,
            name_label: Label {
                x: center_x,
                y: bottom + config.name_offset,
                text: name.to_string(),
            },
            caption: Label {
                x: center_x,
                y: bottom + config.caption_offset,
                text: format!("{:.2}×", real_radius),
            },
        }
    }

    /// Right edge of the circle
    pub fn right(&self) -> f64 {
        self.center_x + self.radius_px
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Separator {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

/// Full diagram: Earth reference, separator and the selected planets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeComparison {
    pub width: f64,
    pub height: f64,
    pub scale_factor: f64,
    pub earth: PlacedBody,
    pub separator: Separator,
    /// Largest first
    pub bodies: Vec<PlacedBody>,
}

/// Pixels per Earth radius: `min(base_size, budget / max_radius)`
///
/// With nothing to fit (`max_radius <= 0` or non-finite) the base size is
/// used. Non-increasing in `max_radius`.
pub fn scale_factor(max_radius: f64, base_size: f64, pixel_budget: f64) -> f64 {
    if !(max_radius > 0.0) || !max_radius.is_finite() {
        return base_size;
    }
    base_size.min(pixel_budget / max_radius)
}

/// Lay out the selected records against the Earth reference
///
/// Records without a usable radius (missing, negative or non-finite) are
/// left out entirely. Ties keep selection order.
pub fn layout_size_comparison(records: &[ExoplanetRecord], config: &LayoutConfig) -> SizeComparison {
    let mut sized: Vec<(&ExoplanetRecord, f64)> = records
        .iter()
        .filter_map(|r| r.pl_rade.filter(|v| v.is_finite() && *v >= 0.0).map(|v| (r, v)))
        .collect();
    sized.sort_by(|a, b| b.1.total_cmp(&a.1));

    let max_radius = sized.first().map(|(_, r)| *r).unwrap_or(0.0);
    let scale = scale_factor(max_radius, config.base_size, config.pixel_budget);
    let center_y = config.height / 2.0;

    let earth = PlacedBody::new("Earth", 1.0, config.base_size, config.earth_x, center_y, None, config);

    let mut bodies = Vec::with_capacity(sized.len());
    let mut current_x = config.start_x;
    for (record, real_radius) in sized {
        let radius_px = real_radius * scale;
        let center_x = current_x + radius_px;
        let band = record.habitability().band();

        bodies.push(PlacedBody::new(
            &record.pl_name,
            real_radius,
            radius_px,
            center_x,
            center_y,
            Some(band),
            config,
        ));
        current_x = center_x + radius_px + config.spacing;
    }

    SizeComparison {
        width: config.width,
        height: config.height,
        scale_factor: scale,
        earth,
        separator: Separator {
            x: config.separator_x,
            y1: config.separator_margin,
            y2: config.height - config.separator_margin,
        },
        bodies,
    }
}
