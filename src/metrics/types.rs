//! Type definitions for the metric comparison model.
//!
//! Canonical values are full-precision reals; the view types carry the
//! display formatting and are JSON-serialized for frontend communication.

use serde::{Deserialize, Serialize};

use super::parse::{change_vs_baseline, group_thousands};

// =============================================================================
// CANONICAL TYPES
// =============================================================================

/// One model variant's measured characteristics.
///
/// A malformed source value is represented as NaN so downstream
/// computations can degrade instead of erroring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Top-1 accuracy, percent in [0, 100].
    pub accuracy: f64,
    /// Energy per fixed workload, kWh.
    pub energy: f64,
    /// Latency per fixed workload, ms.
    pub time: f64,
}

impl MetricSnapshot {
    pub fn new(accuracy: f64, energy: f64, time: f64) -> Self {
        Self {
            accuracy,
            energy,
            time,
        }
    }

    /// Clamp accuracy into its logical [0, 100] range. NaN is preserved as
    /// the malformed-input marker.
    pub(crate) fn sanitized(mut self) -> Self {
        if self.accuracy.is_finite() {
            self.accuracy = self.accuracy.clamp(0.0, 100.0);
        }
        self
    }
}

// =============================================================================
// VIEW TYPES (serialized to frontend)
// =============================================================================

/// Formatted values for one comparison card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotView {
    /// Accuracy with percent suffix ("92.4%").
    pub accuracy: String,
    /// Energy with one decimal ("4.2").
    pub energy: String,
    /// Latency with thousands grouping ("1,240").
    pub time: String,
}

impl SnapshotView {
    fn from_snapshot(snapshot: &MetricSnapshot) -> Self {
        Self {
            accuracy: format!("{:.1}%", snapshot.accuracy),
            energy: format!("{:.1}", snapshot.energy),
            time: group_thousands(snapshot.time),
        }
    }
}

/// Derived display view of the snapshot pair.
///
/// Recomputed from the canonical pair on every read; the delta fields are
/// never stored, so they cannot drift from the values they describe.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub baseline: SnapshotView,
    pub optimized: SnapshotView,
    /// Accuracy change relative to baseline, signed percentage ("-0.6%").
    pub accuracy_change: String,
    /// Energy change relative to baseline, signed percentage ("-73.8%").
    pub energy_change: String,
    /// Latency speed-up factor ("4x Faster").
    pub time_change: String,
}

impl ComparisonView {
    /// Build the display view for a snapshot pair.
    pub fn derive(baseline: &MetricSnapshot, optimized: &MetricSnapshot) -> Self {
        Self {
            baseline: SnapshotView::from_snapshot(baseline),
            optimized: SnapshotView::from_snapshot(optimized),
            accuracy_change: change_vs_baseline(optimized.accuracy, baseline.accuracy),
            energy_change: change_vs_baseline(optimized.energy, baseline.energy),
            time_change: speedup_label(baseline.time, optimized.time),
        }
    }
}

/// One bar-chart row of the energy vs. accuracy trade-off view.
#[derive(Debug, Clone, Serialize)]
pub struct TradeOffPoint {
    pub name: String,
    pub energy: f64,
    pub accuracy: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_change: Option<String>,
}

impl TradeOffPoint {
    /// The two chart rows for a snapshot pair. Malformed values chart as 0.
    pub fn pair(baseline: &MetricSnapshot, optimized: &MetricSnapshot) -> Vec<TradeOffPoint> {
        vec![
            TradeOffPoint {
                name: "BASELINE MODEL".to_string(),
                energy: chartable(baseline.energy),
                accuracy: chartable(baseline.accuracy),
                energy_change: None,
            },
            TradeOffPoint {
                name: "OPTIMIZED MODEL".to_string(),
                energy: chartable(optimized.energy),
                accuracy: chartable(optimized.accuracy),
                energy_change: Some(change_vs_baseline(optimized.energy, baseline.energy)),
            },
        ]
    }
}

/// A supplementary metric card (GPU utilization, memory footprint, ...).
/// Static display data carried by the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuxMetric {
    pub label: String,
    pub value: String,
    pub change: String,
}

fn speedup_label(baseline_time: f64, optimized_time: f64) -> String {
    let factor = baseline_time / optimized_time;
    if factor.is_finite() && factor > 0.0 {
        format!("{factor:.0}x Faster")
    } else {
        "N/A".to_string()
    }
}

fn chartable(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
