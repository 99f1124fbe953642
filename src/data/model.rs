use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// DatedPoint – a single sample of a series
// ---------------------------------------------------------------------------

/// One point of a dated series.
///
/// `x` is kept as the original date text; it is only parsed when compared.
/// `y` is opaque: a numeric score, a metadata object, or anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedPoint {
    /// Instant-like string, e.g. `"2017-01-17T12:51:49.637937Z"`.
    pub x: String,
    /// Payload attached to the instant.
    pub y: Value,
}

impl DatedPoint {
    pub fn new(x: impl Into<String>, y: impl Into<Value>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// NamedSeries / Entity – one tagged row of the dataset
// ---------------------------------------------------------------------------

/// A series stored under a key (`"score"`, `"extra"`, ...).
///
/// The series is assumed sorted ascending by `x`. Nothing checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub key: String,
    #[serde(default)]
    pub series: Vec<DatedPoint>,
}

/// A tagged entity carrying several named series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Category tag used for filtering.
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub details: Vec<NamedSeries>,
}

impl Entity {
    /// The series stored under `key`, or an empty slice when the key is absent.
    ///
    /// Only the first `NamedSeries` with a matching key is considered.
    pub fn series(&self, key: &str) -> &[DatedPoint] {
        self.details
            .iter()
            .find(|d| d.key == key)
            .map(|d| d.series.as_slice())
            .unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete read-only input
// ---------------------------------------------------------------------------

/// The full dataset. Serialized as a bare JSON array of entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub entities: Vec<Entity>,
}

impl Dataset {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ResultRecord – one row of an enriched extraction
// ---------------------------------------------------------------------------

/// A score point joined with its entity title and aligned extra payload.
///
/// Borrows from the dataset it was extracted from. `extra` is the aligned
/// extra's `y`, or an owned empty object when no extra was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub score: &'a Value,
    pub extra: Cow<'a, Value>,
}

impl<'a> ResultRecord<'a> {
    pub(crate) fn new(title: &'a str, score: &'a DatedPoint, extra: Option<&'a DatedPoint>) -> Self {
        let extra = match extra {
            Some(point) => Cow::Borrowed(&point.y),
            None => Cow::Owned(Value::Object(Map::new())),
        };
        Self {
            title,
            date: &score.x,
            score: &score.y,
            extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_key_yields_empty_series() {
        let entity = Entity {
            slug: "aggregation-overall".into(),
            title: "t".into(),
            details: vec![NamedSeries {
                key: "score".into(),
                series: vec![DatedPoint::new("2017-01-17T12:00:00Z", 1)],
            }],
        };
        assert_eq!(entity.series("score").len(), 1);
        assert!(entity.series("extra").is_empty());
    }

    #[test]
    fn dataset_deserializes_from_bare_array() {
        let ds: Dataset = serde_json::from_value(json!([
            { "slug": "a", "title": "A", "details": [{ "key": "score" }] },
            { "slug": "b", "title": "B" }
        ]))
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.entities[0].series("score").is_empty());
        assert!(ds.entities[1].details.is_empty());
    }

    #[test]
    fn record_without_extra_serializes_empty_object() {
        let point = DatedPoint::new("2017-01-17T12:00:00Z", 3);
        let record = ResultRecord::new("Overall", &point, None);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "title": "Overall", "date": "2017-01-17T12:00:00Z", "score": 3, "extra": {} })
        );
    }
}
