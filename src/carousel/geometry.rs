use super::feed::COPIES;

/// Slot that sits in view at `offset`, clamped into `[0, len)`.
///
/// Returns `None` while the container has no height yet.
pub fn index_for_offset(offset: f64, item_height: f64, len: usize) -> Option<usize> {
    if item_height <= 0.0 || len == 0 || !offset.is_finite() {
        return None;
    }
    let index = (offset / item_height).round();
    if index <= 0.0 {
        Some(0)
    } else {
        Some((index as usize).min(len - 1))
    }
}

/// Silent rewrite that keeps the scroll position away from both ends.
///
/// Hitting the very top lands on the start of the middle copy, reaching the
/// last slot lands on the same item in the first copy. Both targets show the
/// same video as the edge they replace.
pub fn wrap_correction(offset: f64, item_height: f64, catalog_len: usize) -> Option<f64> {
    if item_height <= 0.0 || catalog_len == 0 {
        return None;
    }
    let n = catalog_len as f64;
    let last = (catalog_len * COPIES - 1) as f64 * item_height;
    if offset <= 0.0 {
        Some(n * item_height)
    } else if offset >= last {
        Some((n - 1.0) * item_height)
    } else {
        None
    }
}

/// Offset of the top edge of `slot`.
pub fn offset_of(slot: usize, item_height: f64) -> f64 {
    slot as f64 * item_height
}
