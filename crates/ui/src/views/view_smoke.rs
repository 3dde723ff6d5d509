use services::PROGRESS_KEY;
use storage::{KeyValueRepository, Storage};

use super::test_harness::{
    FakeCurriculum, ViewKind, setup_view_harness, setup_view_harness_with_storage,
};

#[tokio::test(flavor = "current_thread")]
async fn curriculum_view_renders_modules_in_order() {
    let curriculum = FakeCurriculum::with_modules(&["solar-basics", "wiring", "inverters"]);
    let mut harness = setup_view_harness(ViewKind::Curriculum, curriculum);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Module solar-basics"), "missing first module in {html}");
    assert!(html.contains("Module inverters"), "missing last module in {html}");
    assert!(
        html.contains("0 of 3 modules completed"),
        "missing progress count in {html}"
    );
    assert!(html.contains("Start Learning"), "missing action label in {html}");
    assert!(
        html.contains("Start your journey"),
        "missing encouragement in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn curriculum_view_renders_error_state_with_retry() {
    let mut harness = setup_view_harness(ViewKind::Curriculum, FakeCurriculum::failing());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load curriculum. Please try again."),
        "missing error copy in {html}"
    );
    assert!(html.contains("Try Again"), "missing retry button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn curriculum_view_reflects_saved_progress() {
    let storage = Storage::in_memory();
    storage
        .kv
        .put(PROGRESS_KEY, r#"["wiring"]"#)
        .await
        .expect("seed progress");

    let curriculum = FakeCurriculum::with_modules(&["solar-basics", "wiring", "inverters"]);
    let mut harness = setup_view_harness_with_storage(ViewKind::Curriculum, curriculum, storage);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("1 of 3 modules completed"),
        "missing progress count in {html}"
    );
    assert!(html.contains("Review Module"), "missing review label in {html}");
    assert!(html.contains("Keep going!"), "missing encouragement in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_renders_content_and_navigation() {
    let curriculum = FakeCurriculum::with_modules(&["solar-basics", "wiring", "inverters"]);
    let mut harness = setup_view_harness(ViewKind::Lesson("wiring".to_owned()), curriculum);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Module wiring"), "missing lesson title in {html}");
    assert!(
        html.contains("<strong>wiring</strong>"),
        "missing rendered markdown in {html}"
    );
    assert!(html.contains("Curriculum"), "missing breadcrumb in {html}");
    assert!(html.contains("Previous Module"), "missing previous link in {html}");
    assert!(html.contains("Skip to Next"), "missing next link in {html}");
    assert!(
        html.contains("Mark this module as complete"),
        "missing toggle copy in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_renders_error_state() {
    let mut harness = setup_view_harness(
        ViewKind::Lesson("missing".to_owned()),
        FakeCurriculum::failing(),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load lesson. Please try again."),
        "missing error copy in {html}"
    );
    assert!(html.contains("Back to Curriculum"), "missing escape link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_seeds_tutor_greeting() {
    let curriculum = FakeCurriculum::with_modules(&["solar-basics"]);
    let mut harness = setup_view_harness(ViewKind::Lesson("solar-basics".to_owned()), curriculum);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Ask me anything about this module"),
        "missing greeting in {html}"
    );
    assert!(html.contains("Ask the AI Tutor"), "missing chat heading in {html}");
    // Empty composer: the send button must render disabled.
    assert!(html.contains("disabled"), "missing disabled send button in {html}");
}
