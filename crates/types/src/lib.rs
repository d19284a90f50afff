pub mod color;
pub mod ids;
pub mod records;

pub use color::Rgb;
pub use ids::{ColorId, LinkId, MovementId, TissueId, UserId};
pub use records::{
    Color, Link, LinkDetail, LinkStatus, MovementKind, MovementRequest, StockItem, StockMovement,
    StockPrediction, StockStatus, Tissue,
};
