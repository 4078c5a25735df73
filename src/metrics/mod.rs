//! Metric snapshots and the views derived from them.
//!
//! # Architecture
//!
//! - **Snapshots**: canonical full-precision values for the baseline and
//!   optimized model variants
//! - **Parsing**: display-formatted source values ("92.4%", "1,240") enter
//!   through one lenient parser; malformed values degrade to NaN
//! - **Score**: the EcoScore composite, recomputed from the pair on every
//!   read
//! - **Dataset**: embedded TOML seed data, with a file override
//!
//! # Example
//!
//! ```ignore
//! use ecocompute::metrics::{compute_eco_score, default_dataset, ComparisonView};
//!
//! let dataset = default_dataset();
//! let score = compute_eco_score(&dataset.baseline, &dataset.optimized);
//! let view = ComparisonView::derive(&dataset.baseline, &dataset.optimized);
//! println!("EcoScore {} ({} energy)", score, view.energy_change);
//! ```

mod dataset;
mod parse;
mod score;
mod types;

pub use dataset::{default_dataset, load_dataset, Dataset};
pub use parse::parse_metric;
pub(crate) use parse::change_vs_baseline;
pub use score::compute_eco_score;
pub use types::*;
