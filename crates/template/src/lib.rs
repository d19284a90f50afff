//! # trama-template
//!
//! HTML templating for printable catalog documents.
//!
//! One deliberate constraint shapes everything here: pagination is
//! manual. Pages are fixed-size chunks of cards with explicit
//! `page-break-before` boundaries, because CSS auto-pagination proved
//! unreliable at keeping an image card and its caption together across a
//! page boundary. Do not reintroduce auto-reflow.

pub mod catalog;
pub mod escape;
pub mod sheet;

pub use catalog::catalog_html;
pub use escape::escape_html;
pub use sheet::sheet_html;

/// Brand line printed in every document header.
pub const BRAND: &str = "TRAMA";

/// Placeholder shown when a tissue has no recorded composition.
pub const COMPOSITION_PLACEHOLDER: &str = "Composition not specified";
