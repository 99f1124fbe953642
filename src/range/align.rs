use log::trace;

use super::search::search;
use crate::data::model::DatedPoint;

/// Find the extra point paired with `scores[index]`.
///
/// When both series have the same length they are assumed to correspond
/// position by position and `extras[index]` is returned without searching.
/// Equal lengths do not prove alignment: two series that happen to match in
/// length but not in dates will pair the wrong points. Otherwise `extras` is
/// binary-searched for the score's date.
///
/// Returns `None` when `index` is out of range or no extra shares the date.
pub fn resolve_extra<'a>(
    scores: &[DatedPoint],
    extras: &'a [DatedPoint],
    index: usize,
) -> Option<&'a DatedPoint> {
    if scores.len() == extras.len() {
        return extras.get(index);
    }
    let score = scores.get(index)?;
    let found = search(extras, &score.x);
    trace!("extra for {} re-searched by date: {found:?}", score.x);
    found.map(|i| &extras[i])
}
