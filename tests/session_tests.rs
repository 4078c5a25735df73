use std::sync::Arc;
use std::time::Duration;

use ecocompute::history::HISTORY_CAPACITY;
use ecocompute::metrics::{compute_eco_score, default_dataset};
use ecocompute::session::RECALC_DELAY;
use ecocompute::{RecalcOutcome, SessionController};

fn fast_controller() -> SessionController {
    SessionController::new().with_recalc_delay(Duration::from_millis(20))
}

#[test]
fn test_default_delay_is_two_seconds() {
    assert_eq!(RECALC_DELAY, Duration::from_millis(2000));
}

#[test]
fn test_seed_dataset_scores_eighty_four() {
    let dataset = default_dataset();
    assert_eq!(compute_eco_score(&dataset.baseline, &dataset.optimized), 84);

    let controller = SessionController::from_dataset(dataset);
    assert_eq!(controller.eco_score(), 84);
}

#[test]
fn test_initial_views_match_seed_dataset() {
    let controller = SessionController::new();

    let view = controller.comparison();
    assert_eq!(view.baseline.accuracy, "92.4%");
    assert_eq!(view.optimized.energy, "1.1");
    assert_eq!(view.accuracy_change, "-0.6%");
    assert_eq!(view.energy_change, "-73.8%");
    assert_eq!(view.time_change, "4x Faster");

    let history = controller.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].version, "v4.0.2-final");
    assert_eq!(history[0].delta, "-0.6%");

    let battery = controller.battery_projection();
    assert!((battery.drain_factor - 4.2 / 1.1).abs() < 1e-9);

    let points = controller.trade_off_points();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].energy_change.as_deref(), Some("-73.8%"));
}

#[tokio::test]
async fn test_recalculate_appends_history_and_perturbs_in_bounds() {
    let controller = fast_controller();
    let (_, before) = controller.snapshots();

    let outcome = controller.recalculate().await;
    let RecalcOutcome::Applied(entry) = outcome else {
        panic!("first trigger should apply");
    };

    assert_eq!(entry.version, "v4.0.3-run");
    let (_, after) = controller.snapshots();
    assert!(after.energy >= before.energy * 0.85 && after.energy <= before.energy * 0.95);
    assert!(after.accuracy >= before.accuracy * 0.97 && after.accuracy <= before.accuracy * 1.01);

    let history = controller.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].version, "v4.0.3-run");
    assert_eq!(history[0].energy, after.energy);
    assert!(!controller.is_recalculating());
}

#[tokio::test]
async fn test_concurrent_trigger_is_ignored() {
    let controller = fast_controller();

    let (first, second) = tokio::join!(controller.recalculate(), controller.recalculate());

    // Exactly one of the two triggers applied.
    assert!(first.is_applied() != second.is_applied());
    assert_eq!(controller.history().len(), 2);
    assert!(!controller.is_recalculating());
}

#[tokio::test]
async fn test_busy_flag_set_while_in_flight() {
    let controller = Arc::new(
        SessionController::new().with_recalc_delay(Duration::from_millis(150)),
    );

    let pending = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.recalculate().await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(controller.is_recalculating());
    assert!(matches!(
        controller.recalculate().await,
        RecalcOutcome::InFlight
    ));

    let outcome = pending.await.unwrap();
    assert!(outcome.is_applied());
    assert!(!controller.is_recalculating());
    assert_eq!(controller.history().len(), 2);
}

#[tokio::test]
async fn test_history_capped_at_five_entries() {
    let controller = SessionController::new().with_recalc_delay(Duration::from_millis(1));

    for _ in 0..6 {
        assert!(controller.recalculate().await.is_applied());
    }

    let history = controller.history();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    // The seeded entry was evicted; only runs remain, newest first.
    assert!(history.iter().all(|e| e.version.ends_with("-run")));
    assert_eq!(history[0].version, "v4.0.7-run");
}

#[tokio::test]
async fn test_cancelled_run_leaves_state_untouched() {
    let controller = Arc::new(
        SessionController::new().with_recalc_delay(Duration::from_millis(200)),
    );
    let score_before = controller.eco_score();

    let pending = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.recalculate().await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(controller.is_recalculating());
    pending.abort();
    tokio::time::sleep(Duration::from_millis(50)).await;

    // The guard restored the idle state and nothing was applied.
    assert!(!controller.is_recalculating());
    assert_eq!(controller.history().len(), 1);
    assert_eq!(controller.eco_score(), score_before);

    // The session accepts a fresh trigger afterwards.
    let controller = Arc::try_unwrap(controller).unwrap_or_else(|_| panic!("pending task leaked"));
    let controller = controller.with_recalc_delay(Duration::from_millis(10));
    assert!(controller.recalculate().await.is_applied());
    assert_eq!(controller.history().len(), 2);
}

#[tokio::test]
async fn test_score_tracks_energy_decay_across_runs() {
    let controller = SessionController::new().with_recalc_delay(Duration::from_millis(1));
    let mut prior_energy = controller.snapshots().1.energy;

    for _ in 0..3 {
        controller.recalculate().await;
        let energy = controller.snapshots().1.energy;
        assert!(energy < prior_energy);
        prior_energy = energy;
    }

    // Three runs bound energy to [0.85^3, 0.95^3] and accuracy to
    // [0.97^3, 1.01^3] of the seed values, which pins the score to 83..=91.
    let score = controller.eco_score();
    assert!((83..=91).contains(&score), "score {score} out of band");
}
