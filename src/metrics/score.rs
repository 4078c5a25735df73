//! EcoScore computation.
//!
//! The composite score weighs accuracy retention at 40% and energy
//! reduction at 60%; energy savings is the dominant signal.

use super::types::MetricSnapshot;

const ACCURACY_WEIGHT: f64 = 40.0;
const ENERGY_WEIGHT: f64 = 60.0;

/// Compute the EcoScore for a baseline/optimized snapshot pair.
///
/// Pure and deterministic; callers recompute on every snapshot change
/// rather than caching. Malformed inputs degrade: a zero or malformed
/// denominator is substituted with 1, a malformed optimized accuracy
/// counts as 0, a malformed optimized energy as 1, and a malformed result
/// maps to score 0.
pub fn compute_eco_score(baseline: &MetricSnapshot, optimized: &MetricSnapshot) -> u8 {
    let acc_base = neutral_denominator(baseline.accuracy);
    let ene_base = neutral_denominator(baseline.energy);
    let acc_opt = if optimized.accuracy.is_finite() {
        optimized.accuracy
    } else {
        0.0
    };
    let ene_opt = if optimized.energy.is_finite() {
        optimized.energy
    } else {
        1.0
    };

    let accuracy_retention = acc_opt / acc_base;
    let energy_reduction = (1.0 - ene_opt / ene_base).max(0.0);

    let raw = accuracy_retention * ACCURACY_WEIGHT + energy_reduction * ENERGY_WEIGHT;
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Substitute 1 for a zero or malformed denominator.
fn neutral_denominator(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        1.0
    }
}
