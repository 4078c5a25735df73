use serde::Serialize;

/// Status tag for a history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Optimized,
}

/// Immutable record of one recalculation event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Capture-time wall clock, preformatted for display ("05 Aug, 14:30").
    pub timestamp: String,
    /// Run label ("v4.0.3-run").
    pub version: String,
    /// Accuracy change of the run relative to baseline ("-0.6%").
    pub delta: String,
    /// Resulting optimized energy, kWh.
    pub energy: f64,
    pub status: RunStatus,
}
