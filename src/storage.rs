//! Native document sink backed by the filesystem.

use async_trait::async_trait;
use std::path::PathBuf;
use trama_traits::{DocumentArtifact, DocumentSink, SinkError};

/// Writes generated documents into a base directory.
///
/// `render` persists the HTML under a fresh name and returns its path as
/// the artifact handle; `share` only logs, since the platform share
/// sheet lives outside this crate.
#[derive(Debug)]
pub struct FilesystemSink {
    base_path: PathBuf,
}

impl FilesystemSink {
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let base_path = base_path.into();
        tokio::fs::create_dir_all(&base_path)
            .await
            .map_err(|e| SinkError::Io(e.to_string()))?;
        Ok(Self { base_path })
    }

    fn document_path(&self) -> PathBuf {
        self.base_path.join(format!("{}.html", uuid::Uuid::new_v4()))
    }
}

#[async_trait]
impl DocumentSink for FilesystemSink {
    async fn render(&self, html: &str) -> Result<DocumentArtifact, SinkError> {
        let path = self.document_path();
        tokio::fs::write(&path, html)
            .await
            .map_err(|e| SinkError::ConversionFailed(e.to_string()))?;
        Ok(DocumentArtifact { uri: path.to_string_lossy().into_owned() })
    }

    async fn share(&self, artifact: &DocumentArtifact) -> Result<(), SinkError> {
        if !std::path::Path::new(&artifact.uri).exists() {
            return Err(SinkError::ShareFailed {
                uri: artifact.uri.clone(),
                message: "artifact no longer exists".to_string(),
            });
        }
        log::info!("document ready to share: {}", artifact.uri);
        Ok(())
    }
}
