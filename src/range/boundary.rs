use crate::error::Bound;

/// Turn a search result into a usable position in a series of `len` points.
///
/// A found index is returned unchanged. A missing start falls back to the
/// first point and a missing end to the last, so an absent bound means
/// "from the beginning" or "through the end".
///
/// `len` must be non-zero; callers skip empty series before resolving.
pub fn resolve(found: Option<usize>, bound: Bound, len: usize) -> usize {
    match (found, bound) {
        (Some(i), _) => i,
        (None, Bound::Start) => 0,
        (None, Bound::End) => len.saturating_sub(1),
    }
}
