//! # trama
//!
//! Stock-movement accounting and memory-bounded catalog document
//! generation for a textile SKU catalog.
//!
//! Two loosely related subsystems form the core:
//! - **[`StockLedger`]**: turns discrete movement requests (IN / OUT /
//!   ADJUST) into new on-hand quantities through the data store's atomic
//!   apply-movement operation, and classifies levels for replenishment.
//! - **[`DocumentAssembler`]**: builds printable HTML catalogs and
//!   single-product sheets, embedding compressed images only while the
//!   projected rendering peak stays under a constrained device's safe
//!   allocation, and degrading to flat color swatches otherwise.
//!
//! Platform capabilities (the backing store, image downloads, HTML-to-PDF
//! conversion and sharing) enter through the traits in [`trama_traits`];
//! this crate adds the native implementations.

pub mod storage;

// Re-export foundation crates
pub use trama_traits as traits;
pub use trama_types as types;

// Re-export domain crates
pub use trama_budget as budget;
pub use trama_ledger as ledger;
pub use trama_template as template;

// Re-export commonly used types
pub use trama_assembler::{AssemblerError, DocumentAssembler, PdfGenerationConfig};
pub use trama_ledger::{Invalidation, LedgerError, OptimisticUpdate, StockCache, StockLedger};
pub use trama_traits::{
    CollectingSink, DataStore, DocumentArtifact, DocumentSink, FetchError, ImageFetcher,
    InMemoryImageFetcher, InMemoryStore, SinkError, StoreError,
};
pub use trama_types::{
    Color, ColorId, Link, LinkDetail, LinkId, LinkStatus, MovementKind, MovementRequest, Rgb,
    StockItem, StockMovement, StockPrediction, StockStatus, Tissue, TissueId, UserId,
};

pub use storage::FilesystemSink;
