use log::{debug, warn};

use super::align::resolve_extra;
use super::boundary::resolve;
use super::date::is_valid_date_string;
use super::search::search;
use crate::config::ExtractOptions;
use crate::data::filter::filter_by_slug;
use crate::data::model::{Dataset, DatedPoint, ResultRecord};
use crate::error::{Bound, RangeError, Result};

// ---------------------------------------------------------------------------
// RangeExtractor
// ---------------------------------------------------------------------------

/// Slices the score series of every entity tagged with the configured slug.
///
/// Extraction never mutates the dataset; results borrow from it. Entities
/// are visited in dataset order and points in ascending index order.
#[derive(Debug, Clone, Default)]
pub struct RangeExtractor {
    options: ExtractOptions,
}

impl RangeExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Unchecked extraction: the inclusive score slice between two exact dates.
    ///
    /// Both `start` and `end` must be present in every matching series. No
    /// date validation and no fallback happen here. An entity where either
    /// bound is missing, or where `start` comes after `end`, contributes
    /// nothing. Use [`RangeExtractor::extract_enriched`] for partial ranges.
    pub fn extract_basic_unchecked<'a>(
        &self,
        dataset: &'a Dataset,
        start: &str,
        end: &str,
    ) -> Vec<&'a DatedPoint> {
        let mut out = Vec::new();
        for entity in filter_by_slug(dataset, &self.options.slug) {
            let scores = entity.series(&self.options.score_key);
            match (search(scores, start), search(scores, end)) {
                (Some(first), Some(last)) if first <= last => {
                    debug!("{}: basic slice [{first}, {last}]", entity.title);
                    out.extend(&scores[first..=last]);
                }
                (first, last) => {
                    warn!(
                        "{}: no exact slice for {start}..{end} (start {first:?}, end {last:?})",
                        entity.title
                    );
                }
            }
        }
        out
    }

    /// Validated extraction: score records between two dates, each joined
    /// with its aligned extra.
    ///
    /// Fails with [`RangeError::InvalidDate`] when either bound is not a
    /// date; that error is the "no result" marker and never coexists with
    /// records. Bounds that are valid dates but absent from a series fall
    /// back to its first and last point. Entities without scores are skipped.
    pub fn extract_enriched<'a>(
        &self,
        dataset: &'a Dataset,
        start: &str,
        end: &str,
    ) -> Result<Vec<ResultRecord<'a>>> {
        for (bound, value) in [(Bound::Start, start), (Bound::End, end)] {
            if !is_valid_date_string(value) {
                warn!("rejecting extraction: invalid {bound} date {value:?}");
                return Err(RangeError::InvalidDate {
                    bound,
                    value: value.to_string(),
                });
            }
        }

        let mut out = Vec::new();
        for entity in filter_by_slug(dataset, &self.options.slug) {
            let scores = entity.series(&self.options.score_key);
            if scores.is_empty() {
                debug!("{}: no scores, skipped", entity.title);
                continue;
            }
            let first = resolve(search(scores, start), Bound::Start, scores.len());
            let last = resolve(search(scores, end), Bound::End, scores.len());

            let extras = entity.series(&self.options.extra_key);
            debug!(
                "{}: enriched range [{first}, {last}], {} scores, {} extras ({})",
                entity.title,
                scores.len(),
                extras.len(),
                if scores.len() == extras.len() { "positional" } else { "by date" }
            );

            for i in first..=last {
                let extra = resolve_extra(scores, extras, i);
                out.push(ResultRecord::new(&entity.title, &scores[i], extra));
            }
        }
        Ok(out)
    }
}
