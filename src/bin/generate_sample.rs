use anyhow::{Context, Result};
use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use log::info;
use serde_json::json;

use series_range::data::model::{Dataset, DatedPoint, Entity, NamedSeries};

const POINTS: usize = 48;

/// Smooth deterministic score curve in [0, 100].
fn score_at(step: usize, phase: f64) -> f64 {
    let t = step as f64 / 12.0 + phase;
    let v = 50.0 + 35.0 * t.sin() + 10.0 * (3.0 * t).cos();
    (v * 100.0).round() / 100.0
}

fn timestamp(base: DateTime<Utc>, step: usize) -> String {
    // Uneven spacing with sub-second noise, like real sampled data.
    let offset = Duration::minutes(17 * step as i64)
        + Duration::microseconds(((step * 637_937) % 1_000_000) as i64);
    (base + offset).to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Build one entity; `extra_every` > 1 drops extras so the two series differ in length.
fn generate_entity(
    slug: &str,
    title: &str,
    base: DateTime<Utc>,
    points: usize,
    phase: f64,
    extra_every: usize,
) -> Entity {
    let mut scores = Vec::with_capacity(points);
    let mut extras = Vec::with_capacity(points);

    for step in 0..points {
        let x = timestamp(base, step);
        scores.push(DatedPoint::new(x.clone(), score_at(step, phase)));
        if step % extra_every == 0 {
            let source = if step % 2 == 0 { "survey" } else { "panel" };
            extras.push(DatedPoint::new(
                x,
                json!({ "sample_size": 200 + (step * 37) % 150, "source": source }),
            ));
        }
    }

    Entity {
        slug: slug.to_string(),
        title: title.to_string(),
        details: vec![
            NamedSeries { key: "score".into(), series: scores },
            NamedSeries { key: "extra".into(), series: extras },
        ],
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let base = Utc
        .with_ymd_and_hms(2017, 1, 17, 12, 0, 0)
        .single()
        .context("building base timestamp")?;

    let dataset = Dataset::new(vec![
        generate_entity("aggregation-overall", "Overall", base, POINTS, 0.0, 1),
        generate_entity("aggregation-overall", "Overall (sparse extras)", base, POINTS, 0.7, 3),
        generate_entity("aggregation-region", "Region North", base, POINTS, 1.4, 1),
        Entity {
            slug: "aggregation-overall".to_string(),
            title: "Overall (no data yet)".to_string(),
            details: Vec::new(),
        },
    ]);

    let output_path = "sample_data.json";
    let text = serde_json::to_string_pretty(&dataset).context("serializing dataset")?;
    std::fs::write(output_path, text).with_context(|| format!("writing {output_path}"))?;

    info!("sample written to {output_path}");
    println!(
        "Wrote {} entities ({} points per series) to {output_path}",
        dataset.len(),
        POINTS
    );
    Ok(())
}
