//! Domain records owned by the data store.
//!
//! The core reads these; it never mutates them directly. The only write
//! path is `MovementRequest`, handed to the store's atomic apply-movement
//! operation.

use crate::ids::{ColorId, LinkId, MovementId, TissueId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fabric product type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tissue {
    pub id: TissueId,
    pub name: String,
    pub sku: String,
    /// Fabric width in centimeters.
    pub width_cm: f32,
    pub composition: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A color definition, optionally carrying perceptual Lab coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    pub name: String,
    pub sku: String,
    /// CSS hex string as entered; parse with [`crate::Rgb`] for rendering.
    pub hex: Option<String>,
    pub lab_l: Option<f32>,
    pub lab_a: Option<f32>,
    pub lab_b: Option<f32>,
    pub family: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Whether a link is currently sellable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkStatus {
    Active,
    Inactive,
}

/// The tissue-color pairing that is the actual sellable/stockable SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub tissue_id: TissueId,
    pub color_id: ColorId,
    /// Derived child SKU (e.g. "T002-VD001").
    pub child_sku: String,
    /// Storage path, or an already-absolute URL passed through as-is.
    pub image_path: Option<String>,
    pub status: LinkStatus,
    pub created_at: DateTime<Utc>,
}

/// A link with its tissue and color detail joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDetail {
    #[serde(flatten)]
    pub link: Link,
    pub tissue: Tissue,
    pub color: Color,
}

/// Current on-hand quantity (rolls) for a link.
///
/// Non-negativity is carried by the type; the value is only ever written
/// by the store's atomic movement application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub link_id: LinkId,
    pub quantity_rolls: u32,
    pub updated_at: DateTime<Utc>,
}

/// The kind of a stock movement, with its quantity transition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementKind {
    In,
    Out,
    Adjust,
}

impl MovementKind {
    /// Applies this movement to a current quantity, yielding the new one.
    ///
    /// `Out` saturates at zero and `Adjust` replaces the level outright;
    /// no combination of inputs can produce a negative level.
    pub fn apply(self, current: u32, quantity: u32) -> u32 {
        match self {
            MovementKind::In => current.saturating_add(quantity),
            MovementKind::Out => current.saturating_sub(quantity),
            MovementKind::Adjust => quantity,
        }
    }
}

/// An append-only record of a quantity change. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub link_id: LinkId,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<UserId>,
}

/// Wire shape for the store's atomic apply-movement operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementRequest {
    pub link_id: LinkId,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub quantity: u32,
    pub user_id: Option<UserId>,
}

/// Stock level classification used for replenishment surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Critical,
    Warning,
    Safe,
}

/// A stockout projection for a link, derived from consumption rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrediction {
    pub link_id: LinkId,
    pub days_until_stockout: f32,
    pub status: StockStatus,
    pub suggested_restock: u32,
}
