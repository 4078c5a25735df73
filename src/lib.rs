//! Computation and session-state core for the EcoCompute AI dashboard.
//!
//! The crate owns the canonical dashboard state: the baseline/optimized
//! metric snapshot pair, the bounded history log of recalculation runs,
//! and the UI-selection state. Everything the dashboard displays is a pure
//! view computed from that state; the one state transition a user can
//! trigger is [`SessionController::recalculate`].
//!
//! A presentation shell (webview, native UI, TUI) reads the views and
//! drives the trigger. Rendering concerns stay on that side of the line.

pub mod battery;
mod error;
pub mod experiments;
pub mod history;
pub mod metrics;
pub mod session;

pub use error::EcoComputeError;
pub use session::{RecalcOutcome, SessionController};

/// Initialize tracing output for the embedding shell. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
