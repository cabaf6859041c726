mod common;

use common::*;
use shop_dashboard_pwa::error::SyncError;
use shop_dashboard_pwa::models::SyncState;

// ============================================================================
// create
// ============================================================================

#[tokio::test]
async fn create_appends_with_next_id() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    sync.load().await.unwrap();

    let created = sync.create(product_draft("B", 20.0)).await.unwrap();

    assert_eq!(created, product(2, "B", 20.0));
    let snapshot = sync.snapshot();
    assert_eq!(snapshot.as_slice(), &[product(1, "A", 10.0), product(2, "B", 20.0)]);
}

#[tokio::test]
async fn create_on_empty_collection_starts_at_one() {
    let sync = local_products(Vec::new());
    sync.load().await.unwrap();

    let created = sync.create(product_draft("First", 1.0)).await.unwrap();
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn sequential_creates_get_unique_increasing_ids() {
    let sync = local_products(vec![product(4, "D", 1.0), product(9, "I", 1.0)]);
    sync.load().await.unwrap();

    let mut issued = Vec::new();
    for i in 0..5 {
        let created = sync.create(product_draft(&format!("N{}", i), 1.0)).await.unwrap();
        issued.push(created.id);
    }

    assert_eq!(issued, vec![10, 11, 12, 13, 14]);
    assert!(sync.snapshot().has_unique_ids());
}

#[tokio::test]
async fn overlapping_creates_never_share_an_id() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    sync.load().await.unwrap();

    let (a, b, c) = tokio::join!(
        sync.create(product_draft("B", 1.0)),
        sync.create(product_draft("C", 1.0)),
        sync.create(product_draft("D", 1.0)),
    );

    assert_eq!((a.unwrap().id, b.unwrap().id, c.unwrap().id), (2, 3, 4));
    assert_eq!(ids(&sync.snapshot()), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn create_issued_during_load_waits_for_loaded_ids() {
    let sync = local_products(vec![product(7, "G", 1.0)]);
    let release = sync.backend().source().gate_fetch();

    let (loaded, created, _) = tokio::join!(
        sync.load(),
        sync.create(product_draft("H", 2.0)),
        async {
            tokio::task::yield_now().await;
            release.send(()).unwrap();
        },
    );

    assert_eq!(loaded.unwrap(), 1);
    assert_eq!(created.unwrap().id, 8);
    assert_eq!(ids(&sync.snapshot()), vec![7, 8]);
}

#[tokio::test]
async fn local_mutations_never_touch_the_network() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    sync.load().await.unwrap();

    sync.create(product_draft("B", 20.0)).await.unwrap();
    sync.update(1, product_draft("A2", 11.0)).await.unwrap();
    sync.delete(2).await.unwrap();

    assert_eq!(sync.backend().source().fetches.get(), 1);
}

// ============================================================================
// update
// ============================================================================

#[tokio::test]
async fn update_overlays_draft_in_place() {
    let mut original = product(2, "Old", 5.0);
    original.category = Some("beauty".into());
    let sync = local_products(vec![product(1, "A", 10.0), original]);
    sync.load().await.unwrap();

    let updated = sync.update(2, product_draft("New", 6.5)).await.unwrap().unwrap();

    assert_eq!(updated.title, "New");
    assert_eq!(updated.category.as_deref(), Some("beauty"));
    assert_eq!(ids(&sync.snapshot()), vec![1, 2]);
    assert_eq!(sync.get(2).unwrap().price, 6.5);
}

#[tokio::test]
async fn update_of_absent_id_is_a_no_op() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    sync.load().await.unwrap();
    let before = sync.snapshot();

    let result = sync.update(3, product_draft("X", 0.0)).await.unwrap();

    assert_eq!(result, None);
    assert_eq!(sync.snapshot(), before);
}

// ============================================================================
// delete
// ============================================================================

#[tokio::test]
async fn delete_removes_matching_item() {
    let sync = local_products(vec![product(1, "A", 10.0), product(2, "B", 20.0)]);
    sync.load().await.unwrap();

    assert!(sync.delete(1).await.unwrap());
    assert_eq!(ids(&sync.snapshot()), vec![2]);
}

#[tokio::test]
async fn delete_of_absent_id_is_a_no_op() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    sync.load().await.unwrap();

    assert!(!sync.delete(42).await.unwrap());
    assert_eq!(sync.len(), 1);
}

// ============================================================================
// load / reload
// ============================================================================

#[tokio::test]
async fn load_twice_is_rejected() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    assert_eq!(sync.load().await.unwrap(), 1);

    assert_eq!(sync.load().await, Err(SyncError::AlreadyLoaded));
    assert_eq!(sync.len(), 1);
}

#[tokio::test]
async fn failed_load_leaves_collection_empty_and_reports() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    sync.backend().source().fail.set(true);

    let err = sync.load().await.unwrap_err();

    assert!(err.is_transport());
    assert!(sync.is_empty());
    assert!(!sync.is_loaded());
    assert!(matches!(sync.state(), SyncState::Error { .. }));

    // Se puede reintentar
    sync.backend().source().fail.set(false);
    assert_eq!(sync.load().await.unwrap(), 1);
    assert_eq!(sync.state(), SyncState::Synced);
}

#[tokio::test]
async fn malformed_listing_leaves_collection_empty() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    sync.backend().source().malformed.set(true);

    let err = sync.load().await.unwrap_err();

    assert!(matches!(err, SyncError::Deserialization(_)));
    assert!(!err.is_transport());
    assert!(sync.is_empty());
    assert_eq!(
        sync.state(),
        SyncState::Error {
            message: err.to_string()
        }
    );
}

#[tokio::test]
async fn reload_shows_syncing_until_listing_arrives() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    sync.load().await.unwrap();

    let release = sync.backend().source().gate_fetch();
    let (reloaded, seen) = tokio::join!(sync.reload(), async {
        tokio::task::yield_now().await;
        let seen = sync.state();
        release.send(()).unwrap();
        seen
    });

    assert_eq!(reloaded.unwrap(), 1);
    assert_eq!(seen, SyncState::Syncing);
    assert_eq!(sync.state(), SyncState::Synced);
}

#[tokio::test]
async fn reload_discards_local_edits() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    sync.load().await.unwrap();
    sync.create(product_draft("Local", 1.0)).await.unwrap();
    assert_eq!(sync.len(), 2);

    assert_eq!(sync.reload().await.unwrap(), 1);
    assert_eq!(ids(&sync.snapshot()), vec![1]);
}

#[tokio::test]
async fn state_follows_the_lifecycle() {
    let sync = local_products(vec![product(1, "A", 10.0)]);
    assert_eq!(sync.state(), SyncState::Idle);

    let release = sync.backend().source().gate_fetch();
    let (_, seen) = tokio::join!(sync.load(), async {
        tokio::task::yield_now().await;
        let seen = sync.state();
        release.send(()).unwrap();
        seen
    });

    assert_eq!(seen, SyncState::Syncing);
    assert_eq!(sync.state(), SyncState::Synced);
}
