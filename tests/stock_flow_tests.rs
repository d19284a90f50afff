mod common;

use common::TestResult;
use common::fixtures::*;
use trama::ledger::{classify, suggested_buy};
use trama::{
    Invalidation, LinkId, MovementKind, StockCache, StockLedger, StockStatus,
};

#[tokio::test]
async fn test_full_stock_movement_flow() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = seeded_store(&[("l1", "T002-VD001", "Verde", "#00FF00", None)]);
    let ledger = StockLedger::new(store.clone());
    let link = LinkId::new("l1");

    assert_eq!(ledger.level(&link).await?, 0);
    ledger.register(&link, MovementKind::In, 20).await?;
    ledger.register(&link, MovementKind::Out, 5).await?;
    ledger.register(&link, MovementKind::Adjust, 12).await?;
    assert_eq!(ledger.level(&link).await?, 12);

    // The log keeps every step, in order.
    let kinds: Vec<MovementKind> = store.movements().iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![MovementKind::In, MovementKind::Out, MovementKind::Adjust]
    );
    Ok(())
}

#[tokio::test]
async fn test_zero_stock_is_idempotent_in_intent() -> TestResult {
    let store = seeded_store(&[("l1", "T002-VD001", "Verde", "#00FF00", None)]);
    let ledger = StockLedger::new(store.clone());
    let link = LinkId::new("l1");

    ledger.register(&link, MovementKind::In, 9).await?;
    ledger.zero(&link).await?;
    ledger.zero(&link).await?;
    assert_eq!(ledger.level(&link).await?, 0);

    let movements = store.movements();
    assert_eq!(movements.len(), 3);
    // First zeroing drains the level; second records an explicit no-op.
    assert_eq!(movements[1].kind, MovementKind::Out);
    assert_eq!(movements[1].quantity, 9);
    assert_eq!(movements[2].kind, MovementKind::Adjust);
    assert_eq!(movements[2].quantity, 0);
    Ok(())
}

#[tokio::test]
async fn test_status_classification_follows_level() -> TestResult {
    let store = seeded_store(&[("l1", "T002-VD001", "Verde", "#00FF00", None)]);
    let ledger = StockLedger::new(store);
    let link = LinkId::new("l1");

    ledger.register(&link, MovementKind::In, 12).await?;
    assert_eq!(classify(ledger.level(&link).await?, 5), StockStatus::Safe);

    ledger.register(&link, MovementKind::Out, 5).await?;
    assert_eq!(classify(ledger.level(&link).await?, 5), StockStatus::Warning);

    ledger.register(&link, MovementKind::Out, 4).await?;
    let level = ledger.level(&link).await?;
    assert_eq!(classify(level, 5), StockStatus::Critical);
    assert_eq!(suggested_buy(level, 10.0, 0.5), 2);
    Ok(())
}

#[tokio::test]
async fn test_optimistic_update_rolls_back_on_remote_failure() -> TestResult {
    let store = seeded_store(&[("l1", "T002-VD001", "Verde", "#00FF00", None)]);
    let ledger = StockLedger::new(store);
    let cache = StockCache::new();
    let link = LinkId::new("l1");
    cache.prime(link.clone(), 10);

    // Apply locally, then hit a remote failure (unknown link): the
    // displayed quantity must revert.
    let update = cache.apply_optimistic(link.clone(), 6);
    let result = ledger.register(&LinkId::new("ghost"), MovementKind::Out, 4).await;
    assert!(result.is_err());
    drop(update);
    assert_eq!(cache.get(&link), Some(10));
    Ok(())
}

#[tokio::test]
async fn test_successful_mutation_invalidates_read_paths() -> TestResult {
    let store = seeded_store(&[("l1", "T002-VD001", "Verde", "#00FF00", None)]);
    let ledger = StockLedger::new(store);
    let cache = StockCache::new();
    let mut events = cache.subscribe();
    let link = LinkId::new("l1");
    cache.prime(link.clone(), 10);

    let update = cache.apply_optimistic(link.clone(), 14);
    ledger.register(&link, MovementKind::In, 4).await?;
    update.commit();

    assert_eq!(events.recv().await?, Invalidation::Link(link.clone()));
    assert_eq!(events.recv().await?, Invalidation::All);
    // Entry dropped so the next read refetches the confirmed level.
    assert_eq!(cache.get(&link), None);
    Ok(())
}
