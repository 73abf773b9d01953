//! Payload batching
//!
//! Both marketplace APIs cap the number of items per update request, with a
//! different limit per endpoint. Payload lists are split into contiguous
//! batches and sent one request per batch.

/// Split `items` into contiguous batches of at most `batch_size` elements.
///
/// Order is preserved, the last batch may be shorter, and empty input yields
/// no batches. `batch_size` must be nonzero; config validation enforces this
/// before any uploader runs.
pub fn divide<T>(items: &[T], batch_size: usize) -> impl Iterator<Item = &[T]> {
    items.chunks(batch_size)
}
