//! Comparison View
//!
//! The engine's face toward its host UI. Owns the selection, the active tab,
//! the bar-chart property and the render toggles; everything else is derived
//! on demand by `snapshot()`, which recomputes from scratch every time.

use serde::{Deserialize, Serialize};

use crate::charts::{
    bar_chart, habitability_chart, radar_chart, scatter_chart, BarChart, HabitabilityChart,
    RadarChart, ScatterChart, ScatterConfig,
};
use crate::layout::{layout_size_comparison, LayoutConfig, SizeComparison};
use crate::record::{ComparableProperty, ExoplanetRecord};
use crate::render::{render_size_comparison, RenderConfig};
use crate::selection::SelectionSet;
use crate::utils::normalization::{normalize_all, NormalizedVector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Search,
    Comparison,
}

/// Everything the host needs to draw the comparison tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSnapshot {
    pub selected: Vec<ExoplanetRecord>,
    pub normalized: Vec<NormalizedVector>,
    pub geometry: SizeComparison,
    pub radar: RadarChart,
    pub bar: BarChart,
    pub scatter: ScatterChart,
    pub habitability: HabitabilityChart,
}

#[derive(Debug, Clone, Default)]
pub struct ComparisonView {
    selection: SelectionSet,
    active_tab: ActiveTab,
    property: ComparableProperty,
    /// Host override for the bar-chart label; the catalogue label otherwise
    property_label: Option<String>,
    pub layout: LayoutConfig,
    pub scatter: ScatterConfig,
    pub render: RenderConfig,
}

impl ComparisonView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_render_config(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a record; the first addition switches to the comparison tab
    ///
    /// Returns false when the selection is full or already has that name.
    pub fn on_add(&mut self, record: ExoplanetRecord) -> bool {
        let was_empty = self.selection.is_empty();
        let added = self.selection.add(record);
        if added && was_empty {
            self.active_tab = ActiveTab::Comparison;
        }
        added
    }

    /// Remove by name; an emptied selection falls back to the search tab
    pub fn on_remove(&mut self, name: &str) -> bool {
        let removed = self.selection.remove(name);
        if self.selection.is_empty() {
            self.active_tab = ActiveTab::Search;
        }
        removed
    }

    pub fn on_clear(&mut self) {
        self.selection.clear();
        self.active_tab = ActiveTab::Search;
    }

    /// Switch tabs; the comparison tab is refused while nothing is selected
    pub fn set_active_tab(&mut self, tab: ActiveTab) -> bool {
        if tab == ActiveTab::Comparison && !self.comparison_enabled() {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn set_property(&mut self, property: ComparableProperty, label: Option<String>) {
        self.property = property;
        self.property_label = label;
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn selected(&self) -> &[ExoplanetRecord] {
        self.selection.records()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn comparison_enabled(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn property(&self) -> ComparableProperty {
        self.property
    }

    pub fn property_label(&self) -> &str {
        self.property_label
            .as_deref()
            .unwrap_or_else(|| self.property.label())
    }

    pub fn normalized(&self) -> Vec<NormalizedVector> {
        normalize_all(self.selected())
    }

    pub fn geometry(&self) -> SizeComparison {
        layout_size_comparison(self.selected(), &self.layout)
    }

    /// Size diagram rendered with the current toggles
    pub fn size_svg(&self) -> String {
        render_size_comparison(&self.geometry(), &self.render)
    }

    pub fn snapshot(&self) -> ComparisonSnapshot {
        let selected = self.selected();
        ComparisonSnapshot {
            selected: selected.to_vec(),
            normalized: normalize_all(selected),
            geometry: layout_size_comparison(selected, &self.layout),
            radar: radar_chart(selected),
            bar: bar_chart(selected, self.property, self.property_label()),
            scatter: scatter_chart(selected, &self.scatter),
            habitability: habitability_chart(selected),
        }
    }
}
