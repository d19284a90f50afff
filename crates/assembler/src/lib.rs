//! # trama-assembler
//!
//! The document assembler: turns a tissue and its active links into a
//! printable HTML document without exceeding a constrained device's safe
//! memory allocation.
//!
//! The pipeline degrades rather than fails: too many links means flat
//! color swatches from the start, a single bad image means a swatch for
//! that card only, and a projected memory peak over the ceiling means
//! every embedded image is discarded in favor of swatches so the
//! document stays visually uniform.
//!
//! Images are prepared strictly one at a time. That is an architectural
//! constraint, not an incidental loop shape; see
//! [`pipeline::DocumentAssembler`].

pub mod config;
mod images;
pub mod pipeline;

pub use config::PdfGenerationConfig;
pub use pipeline::{AssemblerError, DocumentAssembler};
