//! Session state and the recalculation trigger.
//!
//! # Architecture
//!
//! - **State**: one `SessionState` owned by the controller, mutated only
//!   through its transition methods
//! - **Views**: EcoScore, comparison deltas, chart rows and the battery
//!   projection are computed from canonical state on every read, never
//!   stored
//! - **Trigger**: `recalculate` runs behind a fixed simulated latency; the
//!   busy flag makes re-entrant triggers a no-op, and a drop guard
//!   restores it if a pending run is cancelled

mod controller;
mod recalc;
mod types;

pub use controller::SessionController;
pub use recalc::RECALC_DELAY;
pub use types::{DashboardTab, OptimizationSettings, QuantizationLevel, RecalcOutcome, UiState};
