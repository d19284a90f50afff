//! # trama-budget
//!
//! Memory model for document generation on constrained devices.
//!
//! Mobile renderers have hard single-allocation limits; an HTML document
//! with inline-encoded images can blow past them well before the heap is
//! actually full, because the renderer transiently duplicates the
//! document text into paint buffers and host-view overhead. This crate
//! estimates that peak ahead of time so the assembler can degrade to
//! flat swatches instead of crashing.
//!
//! All numbers here are policy constants tuned against observed failures,
//! not hardware probes.

pub mod batch;
pub mod resize;

pub use batch::{ByteSized, split_into_batches};
pub use resize::{ResizePlan, plan_resize};

/// Safe-allocation ceiling the assembler targets, in bytes (30 MiB).
pub const SAFE_ALLOCATION: usize = 30 * 1024 * 1024;

/// Allocation zone where out-of-memory failure is likely (80 MiB).
pub const CRITICAL_ALLOCATION: usize = 80 * 1024 * 1024;

/// Per-image raw-size ceiling above which compression is required (100 KiB).
pub const MAX_IMAGE_SIZE: usize = 100 * 1024;

/// Multiplier modeling the renderer's transient duplication of the
/// document (text + paint buffers + host-view overhead).
pub const PEAK_MEMORY_MULTIPLIER: usize = 3;

/// Inflation factor of text-safe inline encoding (~33% plus padding).
const ENCODED_OVERHEAD: f64 = 1.37;

/// Fixed data-URI prefix length, in bytes.
const DATA_URI_PREFIX: usize = 30;

/// Markup overhead: fixed base plus a per-image structural share.
const MARKUP_BASE_OVERHEAD: usize = 10_000;
const MARKUP_PER_IMAGE_OVERHEAD: usize = 500;

/// Estimated byte size of binary data once inline-encoded as text.
pub fn estimate_encoded_size(raw_bytes: usize) -> usize {
    (raw_bytes as f64 * ENCODED_OVERHEAD).ceil() as usize + DATA_URI_PREFIX
}

/// Projected memory profile of a document embedding the given images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryEstimate {
    /// Sum of inline-encoded image sizes.
    pub total_encoded: usize,
    /// Encoded images plus markup overhead.
    pub document_size: usize,
    /// Transient peak during rendering.
    pub peak_memory: usize,
    /// Whether the peak exceeds [`SAFE_ALLOCATION`].
    pub exceeds_limit: bool,
}

/// Estimates the rendering memory profile for a set of image payloads.
pub fn estimate_document_memory(image_sizes: &[usize]) -> MemoryEstimate {
    let total_encoded: usize = image_sizes.iter().map(|&s| estimate_encoded_size(s)).sum();
    let markup_overhead = MARKUP_BASE_OVERHEAD + image_sizes.len() * MARKUP_PER_IMAGE_OVERHEAD;
    let document_size = total_encoded + markup_overhead;
    let peak_memory = document_size * PEAK_MEMORY_MULTIPLIER;
    MemoryEstimate {
        total_encoded,
        document_size,
        peak_memory,
        exceeds_limit: peak_memory > SAFE_ALLOCATION,
    }
}

/// Whether a raw image payload must be compressed before embedding.
pub fn should_compress(raw_bytes: usize) -> bool {
    raw_bytes > MAX_IMAGE_SIZE
}

/// Formats a byte count for log lines ("512 B", "1.5 KB", "2.3 MB").
pub fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
