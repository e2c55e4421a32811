//! Bounded slices of the bookmark collection.

/// Returns `(position, item)` pairs for `collection[index_start..index_end]`.
///
/// Positions are absolute indices into `collection`. Bounds are clamped to
/// the collection, so an out-of-range window produces an empty result.
pub fn slice<T>(collection: &[T], index_start: usize, index_end: usize) -> Vec<(usize, &T)> {
    let end = index_end.min(collection.len());
    let start = index_start.min(end);
    collection[start..end]
        .iter()
        .enumerate()
        .map(|(offset, item)| (start + offset, item))
        .collect()
}

/// Window starting at `index_start` holding at most `limit` items.
pub fn slice_from<T>(collection: &[T], index_start: usize, limit: usize) -> Vec<(usize, &T)> {
    slice(collection, index_start, index_start.saturating_add(limit))
}
