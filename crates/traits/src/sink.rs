//! DocumentSink trait for the print/share capability.
//!
//! The contract is deliberately narrow: hand over well-formed HTML, get
//! back a handle to the generated artifact, then ask for it to be shared.
//! PDF conversion internals and the platform share sheet live behind it.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// A handle to a generated document artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentArtifact {
    /// Platform-specific URI of the artifact (file path, content URI, ...).
    pub uri: String,
}

/// Error type for document conversion and sharing.
#[derive(Error, Debug, Clone)]
pub enum SinkError {
    #[error("Document conversion failed: {0}")]
    ConversionFailed(String),

    #[error("Sharing failed for '{uri}': {message}")]
    ShareFailed { uri: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

/// A trait converting HTML into a shareable document artifact.
#[async_trait]
pub trait DocumentSink: Send + Sync + Debug {
    /// Convert an HTML document into an artifact and return its handle.
    async fn render(&self, html: &str) -> Result<DocumentArtifact, SinkError>;

    /// Hand an artifact to the platform share/export action.
    async fn share(&self, artifact: &DocumentArtifact) -> Result<(), SinkError>;
}

/// A sink that keeps every rendered document in memory.
///
/// Used by tests to inspect generated HTML and shared artifacts.
#[derive(Debug, Default)]
pub struct CollectingSink {
    rendered: Mutex<Vec<String>>,
    shared: Mutex<Vec<DocumentArtifact>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// HTML documents rendered so far, in order.
    pub fn rendered(&self) -> Vec<String> {
        self.rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Artifacts handed to the share action so far, in order.
    pub fn shared(&self) -> Vec<DocumentArtifact> {
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl DocumentSink for CollectingSink {
    async fn render(&self, html: &str) -> Result<DocumentArtifact, SinkError> {
        let mut rendered = self
            .rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        rendered.push(html.to_string());
        Ok(DocumentArtifact {
            uri: format!("memory://documents/{}", rendered.len()),
        })
    }

    async fn share(&self, artifact: &DocumentArtifact) -> Result<(), SinkError> {
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(artifact.clone());
        Ok(())
    }
}
