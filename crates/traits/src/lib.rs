//! Platform abstraction traits for the Trama pipeline.
//!
//! The core consumes three capabilities it does not implement itself:
//! a relational data store with an atomic stock-movement operation, an
//! image fetcher, and a document sink that turns HTML into a shareable
//! artifact. Each seam ships with an in-memory implementation that works
//! in any environment and backs the test suites.

pub mod fetch;
pub mod sink;
pub mod store;

pub use fetch::{FetchError, ImageFetcher, InMemoryImageFetcher, SharedImageData};
pub use sink::{CollectingSink, DocumentArtifact, DocumentSink, SinkError};
pub use store::{DataStore, InMemoryStore, StoreError};
