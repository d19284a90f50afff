//! DataStore trait for the managed catalog/stock backend.
//!
//! The backend owns all records; the core's only write path is the atomic
//! apply-movement operation, which performs read-current, compute-next,
//! persist-and-log in one transaction keyed by the link. The core must
//! never do that read-modify-write locally, or concurrent callers lose
//! updates.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Mutex;
use thiserror::Error;
use trama_types::{
    Color, Link, LinkDetail, LinkId, LinkStatus, MovementRequest, StockItem, StockMovement, Tissue,
    TissueId,
};

/// Error type for data store operations.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// The managed backend the core reads from and registers movements against.
///
/// # Implementations
///
/// - [`InMemoryStore`]: seedable reference implementation (always available)
/// - Host applications adapt their real backend behind this trait.
#[async_trait]
pub trait DataStore: Send + Sync + Debug {
    /// Point lookup of a tissue record.
    async fn tissue(&self, id: &TissueId) -> Result<Option<Tissue>, StoreError>;

    /// Point lookup of a link with tissue and color detail joined in.
    async fn link_detail(&self, id: &LinkId) -> Result<Option<LinkDetail>, StoreError>;

    /// Active links for a tissue, with color detail, ordered by child SKU.
    async fn active_links(&self, tissue: &TissueId) -> Result<Vec<LinkDetail>, StoreError>;

    /// Current stock item for a link. `None` models "never had stock".
    async fn stock_item(&self, link: &LinkId) -> Result<Option<StockItem>, StoreError>;

    /// Atomically applies a movement: reads the current quantity, computes
    /// the next per [`trama_types::MovementKind::apply`], persists the new
    /// quantity and appends the movement record, all in one transaction.
    async fn apply_movement(&self, request: MovementRequest) -> Result<StockItem, StoreError>;

    /// Resolves a stored image path to a public URL. Paths that are
    /// already absolute URLs pass through unchanged.
    fn image_url(&self, path: &str) -> String;
}

/// A seedable in-memory data store.
///
/// All state lives behind a single mutex, which is what makes
/// `apply_movement` atomic here: the read-compute-write-log sequence runs
/// under one lock acquisition.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
    image_base_url: String,
}

#[derive(Debug, Default)]
struct Inner {
    tissues: HashMap<TissueId, Tissue>,
    colors: HashMap<trama_types::ColorId, Color>,
    links: HashMap<LinkId, Link>,
    stock: HashMap<LinkId, StockItem>,
    movements: Vec<StockMovement>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_image_base_url("memory://images")
    }

    pub fn with_image_base_url(base_url: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            image_base_url: base_url.into(),
        }
    }

    pub fn insert_tissue(&self, tissue: Tissue) {
        self.lock().tissues.insert(tissue.id.clone(), tissue);
    }

    pub fn insert_color(&self, color: Color) {
        self.lock().colors.insert(color.id.clone(), color);
    }

    pub fn insert_link(&self, link: Link) {
        self.lock().links.insert(link.id.clone(), link);
    }

    /// Directly seeds a stock level, bypassing the movement log. Test setup only.
    pub fn seed_stock(&self, link: &LinkId, quantity_rolls: u32) {
        self.lock().stock.insert(
            link.clone(),
            StockItem {
                link_id: link.clone(),
                quantity_rolls,
                updated_at: Utc::now(),
            },
        );
    }

    /// All movements appended so far, oldest first.
    pub fn movements(&self) -> Vec<StockMovement> {
        self.lock().movements.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a panic mid-append; tests should see it.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn detail(inner: &Inner, link: &Link) -> Result<LinkDetail, StoreError> {
        let tissue = inner
            .tissues
            .get(&link.tissue_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("tissue {}", link.tissue_id)))?;
        let color = inner
            .colors
            .get(&link.color_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("color {}", link.color_id)))?;
        Ok(LinkDetail { link: link.clone(), tissue, color })
    }
}

#[async_trait]
impl DataStore for InMemoryStore {
    async fn tissue(&self, id: &TissueId) -> Result<Option<Tissue>, StoreError> {
        Ok(self.lock().tissues.get(id).cloned())
    }

    async fn link_detail(&self, id: &LinkId) -> Result<Option<LinkDetail>, StoreError> {
        let inner = self.lock();
        match inner.links.get(id) {
            Some(link) => Self::detail(&inner, link).map(Some),
            None => Ok(None),
        }
    }

    async fn active_links(&self, tissue: &TissueId) -> Result<Vec<LinkDetail>, StoreError> {
        let inner = self.lock();
        let mut details: Vec<LinkDetail> = inner
            .links
            .values()
            .filter(|l| l.tissue_id == *tissue && l.status == LinkStatus::Active)
            .map(|l| Self::detail(&inner, l))
            .collect::<Result<_, _>>()?;
        details.sort_by(|a, b| a.link.child_sku.cmp(&b.link.child_sku));
        Ok(details)
    }

    async fn stock_item(&self, link: &LinkId) -> Result<Option<StockItem>, StoreError> {
        Ok(self.lock().stock.get(link).cloned())
    }

    async fn apply_movement(&self, request: MovementRequest) -> Result<StockItem, StoreError> {
        let mut inner = self.lock();
        if !inner.links.contains_key(&request.link_id) {
            return Err(StoreError::Remote(format!(
                "link {} does not exist",
                request.link_id
            )));
        }

        let current = inner
            .stock
            .get(&request.link_id)
            .map(|item| item.quantity_rolls)
            .unwrap_or(0);
        let next = request.kind.apply(current, request.quantity);
        let now = Utc::now();

        let item = StockItem {
            link_id: request.link_id.clone(),
            quantity_rolls: next,
            updated_at: now,
        };
        inner.stock.insert(request.link_id.clone(), item.clone());
        inner.movements.push(StockMovement {
            id: uuid::Uuid::new_v4().to_string().into(),
            link_id: request.link_id,
            kind: request.kind,
            quantity: request.quantity,
            created_at: now,
            user_id: request.user_id,
        });
        Ok(item)
    }

    fn image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.image_base_url, path)
        }
    }
}
