//! Greedy batching of sized items under an encoded-memory ceiling.

use crate::estimate_encoded_size;

/// Anything with a known raw byte size.
pub trait ByteSized {
    fn byte_size(&self) -> usize;
}

impl ByteSized for usize {
    fn byte_size(&self) -> usize {
        *self
    }
}

impl<T> ByteSized for (T, usize) {
    fn byte_size(&self) -> usize {
        self.1
    }
}

/// Splits items into batches whose summed encoded size stays within
/// `max_batch_memory`.
///
/// Order-preserving and lossless: concatenating the output reproduces the
/// input. An item whose own encoded size exceeds the ceiling is emitted
/// alone in its batch rather than dropped or split.
pub fn split_into_batches<T: ByteSized>(items: Vec<T>, max_batch_memory: usize) -> Vec<Vec<T>> {
    let mut batches: Vec<Vec<T>> = Vec::new();
    let mut current: Vec<T> = Vec::new();
    let mut current_size = 0usize;

    for item in items {
        let encoded = estimate_encoded_size(item.byte_size());
        if current_size + encoded > max_batch_memory && !current.is_empty() {
            batches.push(std::mem::take(&mut current));
            current_size = 0;
        }
        current.push(item);
        current_size += encoded;
    }

    if !current.is_empty() {
        batches.push(current);
    }
    batches
}
