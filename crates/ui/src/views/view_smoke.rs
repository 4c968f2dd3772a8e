use std::sync::Arc;

use quiz_core::RngSource;

use super::test_harness::{FailingSource, StaticSource, sample_countries, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_board_after_load() {
    let source = Arc::new(StaticSource {
        drafts: sample_countries(&["Chile", "Peru", "Kenya", "Norway", "Japan"]),
    });
    let mut harness = setup_view_harness(source, RngSource::seeded(2));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Guess the Flag"), "missing title in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Attempts: 0"), "missing attempts in {html}");
    assert!(html.contains("Flag of "), "missing flag alt text in {html}");
    assert_eq!(html.matches("quiz-option-").count(), 4, "expected 4 options in {html}");
    assert!(html.contains("Skip"), "missing skip button in {html}");
    assert!(html.contains("Seed 2"), "missing seed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness(Arc::new(FailingSource), RngSource::seeded(3));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Failed to load flags"), "missing error in {html}");
    assert!(!html.contains("Score:"), "unexpected score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_no_data_for_empty_catalog() {
    let source = Arc::new(StaticSource { drafts: Vec::new() });
    let mut harness = setup_view_harness(source, RngSource::seeded(4));
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("No data."), "missing empty state in {html}");
}
