//! The session controller: canonical dashboard state and its transitions.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tracing::{info, warn};

use crate::battery::BatteryProjection;
use crate::error::EcoComputeError;
use crate::experiments::ExperimentRun;
use crate::history::{HistoryEntry, HistoryLog};
use crate::metrics::{
    change_vs_baseline, compute_eco_score, default_dataset, load_dataset, AuxMetric,
    ComparisonView, Dataset, MetricSnapshot, TradeOffPoint,
};

use super::recalc;
use super::types::{DashboardTab, OptimizationSettings, RecalcOutcome, UiState};

/// Everything one dashboard session owns. In-memory and process-lifetime
/// only.
#[derive(Debug)]
struct SessionState {
    baseline: MetricSnapshot,
    optimized: MetricSnapshot,
    history: HistoryLog,
    recalculating: bool,
    ui: UiState,
    settings: OptimizationSettings,
    experiments: Vec<ExperimentRun>,
    aux_metrics: Vec<AuxMetric>,
}

/// Owns the session state and exposes it to a presentation shell.
///
/// All reads return owned views so the shell never holds a lock; all
/// mutations go through `&self` transition methods.
pub struct SessionController {
    state: Mutex<SessionState>,
    recalc_delay: Duration,
}

/// Clears the busy flag when a recalculation run ends, including when the
/// pending future is dropped mid-delay.
struct BusyGuard<'a> {
    state: &'a Mutex<SessionState>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.recalculating = false;
        }
    }
}

impl SessionController {
    /// Start a session from the embedded default dataset.
    pub fn new() -> Self {
        Self::from_dataset(default_dataset())
    }

    /// Start a session from a parsed dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let seed = recalc::seed_entry(&dataset.baseline, &dataset.optimized);
        Self {
            state: Mutex::new(SessionState {
                baseline: dataset.baseline,
                optimized: dataset.optimized,
                history: HistoryLog::seeded(seed),
                recalculating: false,
                ui: UiState::default(),
                settings: OptimizationSettings::default(),
                experiments: dataset.experiments,
                aux_metrics: dataset.aux_metrics,
            }),
            recalc_delay: recalc::RECALC_DELAY,
        }
    }

    /// Start a session from a dataset file.
    pub fn from_dataset_file(path: &Path) -> Result<Self, EcoComputeError> {
        let dataset = load_dataset(path).map_err(|e| EcoComputeError::Dataset(e.to_string()))?;
        Ok(Self::from_dataset(dataset))
    }

    /// Override the simulated recalculation latency. Intended for tests;
    /// the dashboard uses [`RECALC_DELAY`](super::RECALC_DELAY).
    pub fn with_recalc_delay(mut self, delay: Duration) -> Self {
        self.recalc_delay = delay;
        self
    }

    // -------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------

    /// Current EcoScore, recomputed from the snapshot pair.
    pub fn eco_score(&self) -> u8 {
        let state = self.lock();
        compute_eco_score(&state.baseline, &state.optimized)
    }

    /// Comparison cards with the derived delta fields.
    pub fn comparison(&self) -> ComparisonView {
        let state = self.lock();
        ComparisonView::derive(&state.baseline, &state.optimized)
    }

    /// Rows for the energy vs. accuracy trade-off chart.
    pub fn trade_off_points(&self) -> Vec<TradeOffPoint> {
        let state = self.lock();
        TradeOffPoint::pair(&state.baseline, &state.optimized)
    }

    /// Drain durations for the battery simulation panel.
    pub fn battery_projection(&self) -> BatteryProjection {
        let state = self.lock();
        BatteryProjection::from_snapshots(&state.baseline, &state.optimized)
    }

    /// History entries, newest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.lock().history.entries().to_vec()
    }

    /// The canonical snapshot pair (baseline, optimized).
    pub fn snapshots(&self) -> (MetricSnapshot, MetricSnapshot) {
        let state = self.lock();
        (state.baseline, state.optimized)
    }

    pub fn is_recalculating(&self) -> bool {
        self.lock().recalculating
    }

    pub fn aux_metrics(&self) -> Vec<AuxMetric> {
        self.lock().aux_metrics.clone()
    }

    pub fn experiments(&self) -> Vec<ExperimentRun> {
        self.lock().experiments.clone()
    }

    /// Experiments matching the current search query.
    pub fn filtered_experiments(&self) -> Vec<ExperimentRun> {
        let state = self.lock();
        state
            .experiments
            .iter()
            .filter(|e| e.matches(&state.ui.search_query))
            .cloned()
            .collect()
    }

    // -------------------------------------------------------------------
    // Recalculation trigger
    // -------------------------------------------------------------------

    /// Run one simulated re-optimization pass.
    ///
    /// Sets the busy flag, waits out the simulated latency, then applies
    /// the whole update atomically: a perturbed optimized snapshot and one
    /// new history entry. A trigger that arrives while a run is in flight
    /// is ignored, not queued. Dropping the returned future cancels the
    /// run; the guard restores the busy flag and no state is touched.
    pub async fn recalculate(&self) -> RecalcOutcome {
        let prior = {
            let mut state = self.lock();
            if state.recalculating {
                warn!("Recalculation already in flight; trigger ignored");
                return RecalcOutcome::InFlight;
            }
            state.recalculating = true;
            state.optimized
        };
        let _guard = BusyGuard { state: &self.state };

        info!("Recalculating optimized model metrics");
        tokio::time::sleep(self.recalc_delay).await;

        let r1: f64 = rand::random();
        let r2: f64 = rand::random();
        let next = recalc::perturb(&prior, r1, r2);

        let entry = {
            let mut state = self.lock();
            let delta = change_vs_baseline(next.accuracy, state.baseline.accuracy);
            let energy_change = change_vs_baseline(next.energy, state.baseline.energy);
            let entry = recalc::build_entry(state.history.len(), delta, next.energy);
            state.optimized = next;
            state.history.record(entry.clone());
            info!(
                "Recalculation complete: {} accuracy {} energy {}",
                entry.version, entry.delta, energy_change
            );
            entry
        };

        RecalcOutcome::Applied(entry)
    }

    // -------------------------------------------------------------------
    // UI selections and settings
    // -------------------------------------------------------------------

    pub fn active_tab(&self) -> DashboardTab {
        self.lock().ui.active_tab
    }

    pub fn set_active_tab(&self, tab: DashboardTab) {
        self.lock().ui.active_tab = tab;
    }

    pub fn search_query(&self) -> String {
        self.lock().ui.search_query.clone()
    }

    /// Update the search query. A non-empty query also switches the view
    /// to the Experiments tab, where the results live.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        let mut state = self.lock();
        if !query.is_empty() && state.ui.active_tab != DashboardTab::Experiments {
            state.ui.active_tab = DashboardTab::Experiments;
        }
        state.ui.search_query = query;
    }

    pub fn is_dark_mode(&self) -> bool {
        self.lock().ui.dark_mode
    }

    pub fn toggle_dark_mode(&self) -> bool {
        let mut state = self.lock();
        state.ui.dark_mode = !state.ui.dark_mode;
        state.ui.dark_mode
    }

    pub fn selected_resource(&self) -> Option<String> {
        self.lock().ui.selected_resource.clone()
    }

    pub fn set_selected_resource(&self, resource: Option<String>) {
        self.lock().ui.selected_resource = resource;
    }

    pub fn settings(&self) -> OptimizationSettings {
        self.lock().settings.clone()
    }

    pub fn update_settings(&self, settings: OptimizationSettings) {
        self.lock().settings = settings;
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap()
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
