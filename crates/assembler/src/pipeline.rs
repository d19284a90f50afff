//! The document generation pipeline.

use crate::config::PdfGenerationConfig;
use crate::images::prepare_data_uri;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use trama_budget::{estimate_document_memory, format_bytes};
use trama_template::{catalog_html, sheet_html};
use trama_traits::{DataStore, DocumentSink, ImageFetcher, SinkError, StoreError};
use trama_types::{LinkId, TissueId};

/// Error type for document generation.
///
/// Individual image failures and budget excesses never appear here; they
/// degrade to swatches inside the pipeline. What does surface is "there
/// is nothing to generate" and failures of the store or the sink.
#[derive(Error, Debug)]
pub enum AssemblerError {
    #[error("Tissue not found: {0}")]
    TissueNotFound(String),

    #[error("Link not found: {0}")]
    LinkNotFound(String),

    #[error("No active colors are linked; nothing to generate")]
    NothingToGenerate,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Assembles printable documents for tissues and single links.
#[derive(Debug)]
pub struct DocumentAssembler<S, F, K> {
    store: Arc<S>,
    fetcher: Arc<F>,
    sink: Arc<K>,
    config: PdfGenerationConfig,
}

impl<S, F, K> DocumentAssembler<S, F, K>
where
    S: DataStore,
    F: ImageFetcher,
    K: DocumentSink,
{
    pub fn new(store: Arc<S>, fetcher: Arc<F>, sink: Arc<K>) -> Self {
        Self { store, fetcher, sink, config: PdfGenerationConfig::default() }
    }

    pub fn with_config(mut self, config: PdfGenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates and shares the catalog document for a tissue.
    ///
    /// Returns `Ok(true)` once the artifact has been handed to the share
    /// action. Links whose image cannot be prepared fall back to a color
    /// swatch individually; a projected memory peak over the safe
    /// allocation discards every embedded image at once.
    pub async fn generate_catalog(&self, tissue_id: &TissueId) -> Result<bool, AssemblerError> {
        let tissue = self
            .store
            .tissue(tissue_id)
            .await?
            .ok_or_else(|| AssemblerError::TissueNotFound(tissue_id.to_string()))?;
        let links = self.store.active_links(tissue_id).await?;
        if links.is_empty() {
            return Err(AssemblerError::NothingToGenerate);
        }
        log::info!(
            "generating catalog for '{}' with {} colors",
            tissue.name,
            links.len()
        );

        let mut images: HashMap<LinkId, String> = HashMap::new();
        if links.len() <= self.config.max_total_images {
            // Images are prepared strictly one at a time. Sequential
            // awaits bound the resident decoded/encoded buffers to one;
            // fanning these futures out reintroduces the out-of-memory
            // failure this pipeline exists to prevent.
            for detail in &links {
                let Some(path) = detail.link.image_path.as_deref() else {
                    continue;
                };
                let url = self.store.image_url(path);
                match prepare_data_uri(
                    self.fetcher.as_ref(),
                    &url,
                    self.config.max_image_dimension,
                    self.config.image_quality,
                )
                .await
                {
                    Ok(data_uri) => {
                        images.insert(detail.link.id.clone(), data_uri);
                    }
                    Err(e) => {
                        log::warn!(
                            "skipping image for {}: {}",
                            detail.link.child_sku,
                            e
                        );
                    }
                }
            }
            apply_budget_policy(&mut images);
        } else {
            log::info!(
                "{} colors exceed the {}-image ceiling, using swatches only",
                links.len(),
                self.config.max_total_images
            );
        }

        let html = catalog_html(&tissue, &links, &images, self.config.max_images_per_page);
        log::debug!("generated document: {}", format_bytes(html.len()));

        let artifact = self.sink.render(&html).await?;
        self.sink.share(&artifact).await?;
        Ok(true)
    }

    /// Generates and shares the product sheet for a single link.
    ///
    /// Always attempts the one image (the count-based ceiling is
    /// irrelevant for a single item); a failed image degrades to the
    /// color swatch.
    pub async fn generate_single(&self, link_id: &LinkId) -> Result<bool, AssemblerError> {
        let detail = self
            .store
            .link_detail(link_id)
            .await?
            .ok_or_else(|| AssemblerError::LinkNotFound(link_id.to_string()))?;

        let mut image = None;
        if let Some(path) = detail.link.image_path.as_deref() {
            let url = self.store.image_url(path);
            match prepare_data_uri(
                self.fetcher.as_ref(),
                &url,
                self.config.max_image_dimension,
                self.config.image_quality,
            )
            .await
            {
                Ok(data_uri) => image = Some(data_uri),
                Err(e) => log::warn!("skipping image for {}: {}", detail.link.child_sku, e),
            }
        }

        let html = sheet_html(&detail, image.as_deref());
        let artifact = self.sink.render(&html).await?;
        self.sink.share(&artifact).await?;
        Ok(true)
    }
}

/// Discards every prepared image when their projected rendering peak
/// exceeds the safe allocation.
///
/// The fallback is global rather than partial so the document stays
/// visually consistent: either all cards carry images or none do.
fn apply_budget_policy(images: &mut HashMap<LinkId, String>) {
    let sizes: Vec<usize> = images.values().map(|uri| uri.len()).collect();
    let estimate = estimate_document_memory(&sizes);
    log::debug!(
        "projected document peak: {} across {} images",
        format_bytes(estimate.peak_memory),
        sizes.len()
    );
    if estimate.exceeds_limit {
        log::warn!(
            "projected peak {} exceeds safe allocation, falling back to swatches",
            format_bytes(estimate.peak_memory)
        );
        images.clear();
    }
}
