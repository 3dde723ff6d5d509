use std::sync::Arc;

use seekho_core::model::{CompletionSet, ModuleId};
use services::ProgressService;
use storage::repository::Storage;

#[tokio::test]
async fn progress_survives_service_restart() {
    let storage = Storage::sqlite("sqlite:file:memdb_progress_flow?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");

    let progress = ProgressService::new(Arc::clone(&storage.kv));
    let intro = ModuleId::new("intro");
    let wiring = ModuleId::new("wiring");

    let set = progress
        .toggle(&CompletionSet::new(), &intro)
        .await
        .expect("toggle intro");
    let set = progress.toggle(&set, &wiring).await.expect("toggle wiring");
    assert_eq!(set.len(), 2);

    // A fresh service over the same backing must see the same set.
    let reopened = ProgressService::new(Arc::clone(&storage.kv));
    let loaded = reopened.load().await;
    assert_eq!(loaded, set);

    // Un-toggling one id persists the removal as well.
    let set = reopened.toggle(&loaded, &intro).await.expect("untoggle");
    assert!(!set.contains(&intro));
    assert!(set.contains(&wiring));
    assert_eq!(reopened.load().await, set);
}

#[tokio::test]
async fn rapid_toggles_do_not_lose_updates() {
    let storage = Storage::sqlite("sqlite:file:memdb_progress_rapid?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");
    let progress = ProgressService::new(Arc::clone(&storage.kv));
    let intro = ModuleId::new("intro");
    let wiring = ModuleId::new("wiring");

    // Two quick clicks: the second derives from the first's in-memory result
    // while both persists are still in flight. The write gate must land them
    // in call order, so the earlier write cannot erase the later one.
    let first = CompletionSet::new().toggled(&intro);
    let second = first.toggled(&wiring);
    let (a, b) = tokio::join!(progress.save(&first), progress.save(&second));
    a.expect("first save");
    b.expect("second save");

    let loaded = progress.load().await;
    assert!(loaded.contains(&intro), "first toggle was erased");
    assert!(loaded.contains(&wiring), "second toggle was erased");
    assert_eq!(loaded.len(), 2);
}

#[tokio::test]
async fn toggle_parity_holds_over_many_rounds() {
    let storage = Storage::sqlite("sqlite:file:memdb_progress_parity?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");
    let progress = ProgressService::new(Arc::clone(&storage.kv));
    let id = ModuleId::new("safety");

    let mut set = CompletionSet::new();
    for round in 1..=7 {
        set = progress.toggle(&set, &id).await.expect("toggle");
        let loaded = progress.load().await;
        assert_eq!(loaded.contains(&id), round % 2 == 1, "round {round}");
    }
}
