//! ImageFetcher trait for abstracting image downloads.
//!
//! Document generation needs the raw bytes behind a link's image URL
//! without being tied to an HTTP client. Hosts plug in their network
//! stack; tests use the in-memory implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Shared image payload (reference-counted bytes).
pub type SharedImageData = Arc<Vec<u8>>;

/// Error type for image fetch operations.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Failed to fetch '{url}': {message}")]
    Failed { url: String, message: String },

    #[error("Timed out fetching '{0}'")]
    TimedOut(String),
}

/// A trait for fetching image payloads by URL.
#[async_trait]
pub trait ImageFetcher: Send + Sync + Debug {
    /// Fetch the raw bytes behind a URL.
    async fn fetch(&self, url: &str) -> Result<SharedImageData, FetchError>;
}

/// An in-memory image fetcher, pre-populated before use.
#[derive(Debug, Default)]
pub struct InMemoryImageFetcher {
    images: RwLock<HashMap<String, SharedImageData>>,
}

impl InMemoryImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, url: impl Into<String>, data: Vec<u8>) {
        if let Ok(mut images) = self.images.write() {
            images.insert(url.into(), Arc::new(data));
        }
    }

    pub fn len(&self) -> usize {
        self.images.read().map(|i| i.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.images.read().map(|i| i.is_empty()).unwrap_or(true)
    }
}

#[async_trait]
impl ImageFetcher for InMemoryImageFetcher {
    async fn fetch(&self, url: &str) -> Result<SharedImageData, FetchError> {
        self.images
            .read()
            .map_err(|_| FetchError::Failed {
                url: url.to_string(),
                message: "image store lock poisoned".to_string(),
            })?
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_fetcher_add_and_fetch() {
        let fetcher = InMemoryImageFetcher::new();
        fetcher.add("https://cdn/img.jpg", vec![1, 2, 3]);

        let data = fetcher.fetch("https://cdn/img.jpg").await.unwrap();
        assert_eq!(&*data, &[1, 2, 3]);
    }

    #[tokio::test]
    async fn test_in_memory_fetcher_not_found() {
        let fetcher = InMemoryImageFetcher::new();
        let result = fetcher.fetch("https://cdn/missing.jpg").await;
        assert!(matches!(result, Err(FetchError::NotFound(_))));
    }

    #[test]
    fn test_in_memory_fetcher_empty() {
        let fetcher = InMemoryImageFetcher::new();
        assert!(fetcher.is_empty());
        fetcher.add("a", vec![]);
        assert_eq!(fetcher.len(), 1);
    }
}
