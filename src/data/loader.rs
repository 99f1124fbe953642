use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::debug;
use serde_json::Value as JsonValue;

use super::model::{Dataset, DatedPoint, Entity, NamedSeries};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "slug": ..., "title": ..., "details": [{ "key": ..., "series": [{ "x", "y" }] }] }]`
/// * `.csv`  – long format, one point per row: `slug,title,key,x,y`
///
/// Series are taken as-is: sortedness by date is the producer's job.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;
    debug!("loaded {} entities from {}", dataset.len(), path.display());
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Parse a dataset from JSON text (a top-level array of entities).
pub fn parse_json(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    if !root.is_array() {
        bail!("Expected top-level JSON array");
    }
    serde_json::from_value(root).context("decoding entities")
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

const CSV_COLUMNS: [&str; 5] = ["slug", "title", "key", "x", "y"];

/// CSV layout: header row naming at least `slug`, `title`, `key`, `x`, `y`.
/// Rows are grouped into entities by `(slug, title)` and into series by
/// `key`, both in first-seen order. Row order within a series is kept.
/// Other columns are ignored.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut idx = [0usize; 5];
    for (slot, name) in idx.iter_mut().zip(CSV_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))?;
    }
    let [slug_idx, title_idx, key_idx, x_idx, y_idx] = idx;

    let mut entities: Vec<Entity> = Vec::new();
    // (slug, title) → position in `entities`; (entity, key) → position in its details.
    let mut entity_index: HashMap<(String, String), usize> = HashMap::new();
    let mut series_index: HashMap<(usize, String), usize> = HashMap::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |i: usize| record.get(i).unwrap_or("");

        let (slug, title, key) = (field(slug_idx), field(title_idx), field(key_idx));
        let point = DatedPoint {
            x: field(x_idx).to_string(),
            y: guess_value(field(y_idx)),
        };

        let e = *entity_index
            .entry((slug.to_string(), title.to_string()))
            .or_insert_with(|| {
                entities.push(Entity {
                    slug: slug.to_string(),
                    title: title.to_string(),
                    details: Vec::new(),
                });
                entities.len() - 1
            });
        let details = &mut entities[e].details;

        let d = *series_index
            .entry((e, key.to_string()))
            .or_insert_with(|| {
                details.push(NamedSeries {
                    key: key.to_string(),
                    series: Vec::new(),
                });
                details.len() - 1
            });
        details[d].series.push(point);
    }

    Ok(Dataset::new(entities))
}

/// Interpret a CSV cell as JSON when it parses (numbers, objects, arrays,
/// booleans), otherwise keep it as a plain string. Empty cells become `null`.
fn guess_value(s: &str) -> JsonValue {
    let s = s.trim();
    if s.is_empty() {
        return JsonValue::Null;
    }
    serde_json::from_str(s).unwrap_or_else(|_| JsonValue::String(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_json_file() {
        let file = write_temp(
            ".json",
            r#"[{"slug":"aggregation-overall","title":"Overall","details":[
                {"key":"score","series":[{"x":"2017-01-17T12:00:00Z","y":1}]},
                {"key":"extra","series":[{"x":"2017-01-17T12:00:00Z","y":{"n":5}}]}
            ]}]"#,
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.entities[0].series("extra")[0].y, json!({"n": 5}));
    }

    #[test]
    fn rejects_non_array_json() {
        let err = parse_json(r#"{"slug":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("top-level JSON array"));
    }

    #[test]
    fn loads_csv_grouping_rows() {
        let file = write_temp(
            ".csv",
            "slug,title,key,x,y\n\
             aggregation-overall,Overall,score,2017-01-17T12:00:00Z,1\n\
             aggregation-overall,Overall,extra,2017-01-17T12:00:00Z,\"{\"\"n\"\":5}\"\n\
             aggregation-overall,Overall,score,2017-01-17T13:00:00Z,2\n\
             aggregation-region,North,score,2017-01-17T12:00:00Z,label\n",
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);

        let overall = &ds.entities[0];
        assert_eq!(overall.series("score").len(), 2);
        assert_eq!(overall.series("score")[1].y, json!(2));
        assert_eq!(overall.series("extra")[0].y, json!({"n": 5}));
        assert_eq!(ds.entities[1].series("score")[0].y, json!("label"));
    }

    #[test]
    fn csv_keeps_first_seen_order_with_interleaved_rows() {
        let file = write_temp(
            ".csv",
            "slug,title,key,x,y\n\
             s,B,score,2017-01-17T12:00:00Z,1\n\
             s,A,extra,2017-01-17T12:00:00Z,10\n\
             s,B,extra,2017-01-17T12:00:00Z,20\n\
             s,A,score,2017-01-17T12:00:00Z,11\n\
             s,B,score,2017-01-17T13:00:00Z,2\n\
             s,A,extra,2017-01-17T13:00:00Z,12\n",
        );
        let ds = load_file(file.path()).unwrap();

        let titles: Vec<&str> = ds.entities.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["B", "A"]);
        let keys: Vec<&str> = ds.entities[1].details.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, ["extra", "score"]);

        let b_scores: Vec<&JsonValue> = ds.entities[0].series("score").iter().map(|p| &p.y).collect();
        assert_eq!(b_scores, [&json!(1), &json!(2)]);
        assert_eq!(ds.entities[1].series("extra").len(), 2);
        assert_eq!(ds.entities[0].series("extra")[0].y, json!(20));
    }

    #[test]
    fn csv_requires_columns() {
        let file = write_temp(".csv", "slug,title,x,y\na,b,c,d\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("'key'"));
    }

    #[test]
    fn unsupported_extension() {
        let file = write_temp(".parquet", "");
        assert!(load_file(file.path()).is_err());
    }
}
