//! The stock ledger service.

use std::sync::Arc;
use thiserror::Error;
use trama_traits::{DataStore, StoreError};
use trama_types::{LinkId, MovementKind, MovementRequest, StockItem, UserId};

/// Error type for ledger operations.
///
/// Remote failures carry the backend's message verbatim; the UI layer
/// owns user-facing recovery (retry, toast). The ledger performs no
/// retries of its own — at most one delivery attempt per call.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Registers stock movements and reads stock levels for links.
#[derive(Debug)]
pub struct StockLedger<S: DataStore> {
    store: Arc<S>,
    acting_user: Option<UserId>,
}

impl<S: DataStore> Clone for StockLedger<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            acting_user: self.acting_user.clone(),
        }
    }
}

impl<S: DataStore> StockLedger<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store, acting_user: None }
    }

    /// Attributes subsequent movements to the given user.
    pub fn with_acting_user(mut self, user: UserId) -> Self {
        self.acting_user = Some(user);
        self
    }

    /// Current on-hand quantity for a link. A link that never had stock
    /// has no stock item, which reads as zero rather than an error.
    pub async fn level(&self, link: &LinkId) -> Result<u32, LedgerError> {
        let item = self.store.stock_item(link).await?;
        Ok(item.map(|i| i.quantity_rolls).unwrap_or(0))
    }

    /// Registers a movement through the store's atomic operation.
    ///
    /// The store reads the current quantity, applies the transition rule
    /// and appends the movement record in one transaction; doing any of
    /// that here would reintroduce lost updates under concurrent callers.
    pub async fn register(
        &self,
        link: &LinkId,
        kind: MovementKind,
        quantity: u32,
    ) -> Result<StockItem, LedgerError> {
        let item = self
            .store
            .apply_movement(MovementRequest {
                link_id: link.clone(),
                kind,
                quantity,
                user_id: self.acting_user.clone(),
            })
            .await?;
        log::debug!(
            "registered {:?}({}) for link {}, level now {}",
            kind,
            quantity,
            link,
            item.quantity_rolls
        );
        Ok(item)
    }

    /// Registers an IN movement (stock received).
    pub async fn register_in(&self, link: &LinkId, quantity: u32) -> Result<StockItem, LedgerError> {
        self.register(link, MovementKind::In, quantity).await
    }

    /// Registers an OUT movement (stock consumed or sold).
    pub async fn register_out(
        &self,
        link: &LinkId,
        quantity: u32,
    ) -> Result<StockItem, LedgerError> {
        self.register(link, MovementKind::Out, quantity).await
    }

    /// Brings a link's stock to zero while keeping the log meaningful.
    ///
    /// A positive level leaves as one OUT of exactly that amount, so the
    /// log records how much was removed. An already-zero level records an
    /// ADJUST(0): a no-op on the number but still an auditable event.
    pub async fn zero(&self, link: &LinkId) -> Result<StockItem, LedgerError> {
        let current = self.level(link).await?;
        if current > 0 {
            self.register(link, MovementKind::Out, current).await
        } else {
            self.register(link, MovementKind::Adjust, 0).await
        }
    }
}
