//! Session-level types: UI selections, settings, trigger outcomes.

use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;

/// Top-level dashboard tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Overview,
    Experiments,
    Resources,
}

/// UI-selection state. Last write wins, single consumer; no computational
/// contract beyond that.
#[derive(Debug, Clone, Serialize)]
pub struct UiState {
    pub active_tab: DashboardTab,
    pub search_query: String,
    pub dark_mode: bool,
    pub selected_resource: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tab: DashboardTab::Overview,
            search_query: String::new(),
            dark_mode: true,
            selected_resource: None,
        }
    }
}

/// Numeric precision used for simulated quantization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuantizationLevel {
    #[default]
    Int8,
    Fp16,
    Bf16,
}

/// Settings panel model. Display state only; the values do not feed the
/// score computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSettings {
    pub quantization: QuantizationLevel,
    /// Unstructured pruning rate in [0, 1].
    pub pruning_rate: f32,
    /// Edge-tier cache distribution toggle.
    pub edge_caching: bool,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            quantization: QuantizationLevel::Int8,
            pruning_rate: 0.4,
            edge_caching: true,
        }
    }
}

/// Result of a recalculation trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum RecalcOutcome {
    /// The run completed and this history entry was recorded.
    Applied(HistoryEntry),
    /// A run was already in flight; the trigger was ignored.
    InFlight,
}

impl RecalcOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, RecalcOutcome::Applied(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantization_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&QuantizationLevel::Int8).unwrap(),
            r#""INT8""#
        );
        assert_eq!(
            serde_json::to_string(&QuantizationLevel::Bf16).unwrap(),
            r#""BF16""#
        );
    }

    #[test]
    fn test_ui_state_defaults() {
        let ui = UiState::default();
        assert_eq!(ui.active_tab, DashboardTab::Overview);
        assert!(ui.dark_mode);
        assert!(ui.search_query.is_empty());
        assert!(ui.selected_resource.is_none());
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = OptimizationSettings {
            quantization: QuantizationLevel::Fp16,
            pruning_rate: 0.25,
            edge_caching: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: OptimizationSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
