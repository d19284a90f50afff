//! # trama-ledger
//!
//! The stock ledger: turns discrete movement requests into new on-hand
//! quantities through the data store's atomic apply-movement operation,
//! classifies stock levels, and keeps read paths coherent after writes.
//!
//! The ledger itself never computes a new quantity locally on the write
//! path. The transition rule lives on [`trama_types::MovementKind`] and is
//! executed by the store inside one transaction, so concurrent callers
//! cannot lose updates.

pub mod cache;
pub mod service;
pub mod status;

pub use cache::{Invalidation, OptimisticUpdate, StockCache};
pub use service::{LedgerError, StockLedger};
pub use status::{
    DEFAULT_AVG_DAILY_CONSUMPTION, DEFAULT_STATUS_THRESHOLD, classify, days_until_stockout,
    predict, suggested_buy,
};
