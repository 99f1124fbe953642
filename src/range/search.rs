use std::cmp::Ordering;

use log::trace;

use super::date::{compare_to_instant, parse_instant};
use crate::data::model::DatedPoint;

/// Binary search `series` for a point whose `x` is the same instant as `target`.
///
/// Returns the index of a match, or `None` (not found) when no point matches,
/// the series is empty, or `target` is not a date. With duplicate instants any
/// one of them may be returned.
///
/// `series` must be sorted ascending by instant. An unsorted series gives
/// unspecified results, and an unparseable `x` met on the search path ends
/// the search as not found.
///
/// `target` is parsed once up front; each probe parses only its own `x`.
pub fn search(series: &[DatedPoint], target: &str) -> Option<usize> {
    if series.is_empty() {
        return None;
    }
    let wanted = parse_instant(target)?;

    let (mut lo, mut hi) = (0usize, series.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        trace!("search {target}: probing [{mid}] {}", series[mid].x);
        match compare_to_instant(&series[mid].x, &wanted)? {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => hi = mid,
            Ordering::Less => lo = mid + 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn hourly(n: usize) -> Vec<DatedPoint> {
        let base = Utc.with_ymd_and_hms(2017, 1, 17, 0, 0, 0).unwrap();
        (0..n)
            .map(|i| {
                let x = (base + Duration::hours(2 * i as i64)).to_rfc3339();
                DatedPoint::new(x, i as i64)
            })
            .collect()
    }

    #[test]
    fn empty_series_is_not_found() {
        assert_eq!(search(&[], "2017-01-17T00:00:00Z"), None);
    }

    #[test]
    fn finds_first_and_last() {
        let s = hourly(5);
        assert_eq!(search(&s, "2017-01-17T00:00:00Z"), Some(0));
        assert_eq!(search(&s, "2017-01-17T08:00:00Z"), Some(4));
    }

    #[test]
    fn matches_instant_across_offsets() {
        let s = hourly(3);
        assert_eq!(search(&s, "2017-01-17T04:00:00+02:00"), Some(1));
    }

    #[test]
    fn past_either_end_is_not_found() {
        let s = hourly(3);
        assert_eq!(search(&s, "2016-12-31T23:00:00Z"), None);
        assert_eq!(search(&s, "2017-02-01T00:00:00Z"), None);
    }

    #[test]
    fn zoned_minute_precision_target_is_found() {
        let s = hourly(3);
        assert_eq!(search(&s, "2017-01-17T02:00Z"), Some(1));
        assert_eq!(search(&s, "2017-01-17T06:00+0200"), Some(2));
    }

    #[test]
    fn invalid_target_is_not_found() {
        assert_eq!(search(&hourly(3), "not-a-date"), None);
    }

    #[test]
    fn duplicate_instants_return_one_of_them() {
        let s = vec![
            DatedPoint::new("2017-01-17T00:00:00Z", 0),
            DatedPoint::new("2017-01-17T01:00:00Z", 1),
            DatedPoint::new("2017-01-17T01:00:00Z", 2),
            DatedPoint::new("2017-01-17T02:00:00Z", 3),
        ];
        let i = search(&s, "2017-01-17T01:00:00Z").unwrap();
        assert!(i == 1 || i == 2);
    }

    proptest! {
        #[test]
        fn every_present_date_is_found(n in 1usize..200, pick in any::<prop::sample::Index>()) {
            let s = hourly(n);
            let i = pick.index(n);
            let found = search(&s, &s[i].x);
            prop_assert_eq!(found, Some(i));
        }

        #[test]
        fn absent_dates_are_not_found(n in 0usize..200, slot in 0usize..201) {
            // Odd hours never occur in a series spaced two hours apart.
            let s = hourly(n);
            let base = Utc.with_ymd_and_hms(2017, 1, 17, 0, 0, 0).unwrap();
            let target = (base + Duration::hours(2 * slot as i64 - 1)).to_rfc3339();
            prop_assert_eq!(search(&s, &target), None);
        }
    }
}
