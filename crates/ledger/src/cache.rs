//! Stock read-path cache with explicit invalidation.
//!
//! Stock levels are displayed from several screens at once, so a
//! successful mutation must refresh every read path keyed by that link
//! and by "all stock". Rather than ad hoc refetching, mutations publish
//! [`Invalidation`] events over a broadcast channel that read paths
//! subscribe to.
//!
//! Optimistic UI updates use [`OptimisticUpdate`]: apply locally, confirm
//! remotely, and the guard rolls the cached value back if dropped without
//! a commit.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tokio::sync::broadcast;
use trama_types::LinkId;

/// A cache invalidation event published after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// The stock level of one link changed.
    Link(LinkId),
    /// Everything keyed by "all stock" must refresh.
    All,
}

/// Cached stock levels plus the invalidation fan-out.
#[derive(Debug)]
pub struct StockCache {
    entries: RwLock<HashMap<LinkId, u32>>,
    events: broadcast::Sender<Invalidation>,
}

impl Default for StockCache {
    fn default() -> Self {
        Self::new()
    }
}

impl StockCache {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(64);
        Self { entries: RwLock::new(HashMap::new()), events }
    }

    /// Subscribe to invalidation events. Every subscriber sees every
    /// event published after its subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<Invalidation> {
        self.events.subscribe()
    }

    /// Cached level for a link, if a read path primed it.
    pub fn get(&self, link: &LinkId) -> Option<u32> {
        self.read().get(link).copied()
    }

    /// Stores a freshly fetched level.
    pub fn prime(&self, link: LinkId, quantity: u32) {
        self.write().insert(link, quantity);
    }

    /// Drops one link's entry and notifies subscribers of both the link
    /// and the "all stock" key, matching how list views are keyed.
    pub fn invalidate(&self, link: &LinkId) {
        self.write().remove(link);
        let _ = self.events.send(Invalidation::Link(link.clone()));
        let _ = self.events.send(Invalidation::All);
    }

    /// Drops everything and notifies subscribers.
    pub fn invalidate_all(&self) {
        self.write().clear();
        let _ = self.events.send(Invalidation::All);
    }

    /// Applies a local value ahead of remote confirmation.
    ///
    /// The returned guard restores the previous value when dropped; call
    /// [`OptimisticUpdate::commit`] after the remote call succeeds.
    pub fn apply_optimistic(&self, link: LinkId, quantity: u32) -> OptimisticUpdate<'_> {
        let previous = self.write().insert(link.clone(), quantity);
        OptimisticUpdate { cache: self, link, previous, committed: false }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<LinkId, u32>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<LinkId, u32>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// An apply/undo pair for one optimistic stock update.
#[derive(Debug)]
#[must_use = "dropping without commit rolls the update back"]
pub struct OptimisticUpdate<'a> {
    cache: &'a StockCache,
    link: LinkId,
    previous: Option<u32>,
    committed: bool,
}

impl OptimisticUpdate<'_> {
    /// Keeps the optimistic value and invalidates read paths so they
    /// refetch the confirmed remote state.
    pub fn commit(mut self) {
        self.committed = true;
        self.cache.invalidate(&self.link);
    }
}

impl Drop for OptimisticUpdate<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        // Remote call failed: the displayed quantity must revert.
        let mut entries = self.cache.write();
        match self.previous {
            Some(value) => entries.insert(self.link.clone(), value),
            None => entries.remove(&self.link),
        };
        drop(entries);
        let _ = self.cache.events.send(Invalidation::Link(self.link.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_and_get() {
        let cache = StockCache::new();
        let link = LinkId::new("l1");
        assert_eq!(cache.get(&link), None);
        cache.prime(link.clone(), 12);
        assert_eq!(cache.get(&link), Some(12));
    }

    #[test]
    fn test_invalidate_drops_entry() {
        let cache = StockCache::new();
        let link = LinkId::new("l1");
        cache.prime(link.clone(), 3);
        cache.invalidate(&link);
        assert_eq!(cache.get(&link), None);
    }

    #[tokio::test]
    async fn test_invalidate_publishes_link_and_all() {
        let cache = StockCache::new();
        let mut events = cache.subscribe();
        let link = LinkId::new("l1");
        cache.invalidate(&link);

        assert_eq!(events.recv().await.unwrap(), Invalidation::Link(link));
        assert_eq!(events.recv().await.unwrap(), Invalidation::All);
    }

    #[test]
    fn test_optimistic_commit_keeps_nothing_stale() {
        let cache = StockCache::new();
        let link = LinkId::new("l1");
        cache.prime(link.clone(), 10);

        let update = cache.apply_optimistic(link.clone(), 7);
        assert_eq!(cache.get(&link), Some(7));
        update.commit();
        // Committed: entry invalidated so readers refetch confirmed state.
        assert_eq!(cache.get(&link), None);
    }

    #[test]
    fn test_optimistic_rollback_restores_previous() {
        let cache = StockCache::new();
        let link = LinkId::new("l1");
        cache.prime(link.clone(), 10);

        {
            let _update = cache.apply_optimistic(link.clone(), 7);
            assert_eq!(cache.get(&link), Some(7));
            // Dropped without commit: remote call failed.
        }
        assert_eq!(cache.get(&link), Some(10));
    }

    #[test]
    fn test_optimistic_rollback_removes_fresh_entry() {
        let cache = StockCache::new();
        let link = LinkId::new("l1");
        {
            let _update = cache.apply_optimistic(link.clone(), 7);
        }
        assert_eq!(cache.get(&link), None);
    }
}
