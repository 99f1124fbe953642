use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{info, warn};
use serde::Serialize;

use series_range::config::{DEFAULT_SLUG, ExtractOptions};
use series_range::data::filter::count_by_slug;
use series_range::data::loader::load_file;
use series_range::range::RangeExtractor;

fn cli() -> Command {
    Command::new("series-range")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract a date range of scores (and their extras) from a dataset")
        .arg(
            Arg::new("path")
                .help("Dataset file (.json or .csv)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .short('s')
                .help("First date of the range, e.g. 2017-01-17T12:51:49.637937Z")
                .required(true),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .short('e')
                .help("Last date of the range")
                .required(true),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("'enriched' (validated, with fallback and extras) or 'basic' (exact dates only, unchecked)")
                .value_parser(["enriched", "basic"])
                .default_value("enriched"),
        )
        .arg(
            Arg::new("slug")
                .long("slug")
                .help("Only extract entities tagged with this slug")
                .default_value(DEFAULT_SLUG),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the JSON output")
                .action(ArgAction::SetTrue),
        )
}

fn arg<'m>(matches: &'m ArgMatches, name: &str) -> Result<&'m str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("missing argument '{name}'"))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serializing output")?;
    println!("{text}");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = cli().get_matches();
    let path = PathBuf::from(arg(&matches, "path")?);
    let start = arg(&matches, "start")?;
    let end = arg(&matches, "end")?;
    let pretty = matches.get_flag("pretty");

    let dataset = load_file(&path).with_context(|| format!("loading {}", path.display()))?;
    let extractor = RangeExtractor::new(ExtractOptions::default().with_slug(arg(&matches, "slug")?));
    info!(
        "{} of {} entities tagged '{}'",
        count_by_slug(&dataset, &extractor.options().slug),
        dataset.len(),
        extractor.options().slug
    );

    match arg(&matches, "mode")? {
        "basic" => {
            let points = extractor.extract_basic_unchecked(&dataset, start, end);
            info!("basic extraction returned {} points", points.len());
            print_json(&points, pretty)
        }
        _ => match extractor.extract_enriched(&dataset, start, end) {
            Ok(records) => {
                info!("enriched extraction returned {} records", records.len());
                print_json(&records, pretty)
            }
            Err(err) => {
                warn!("{err}");
                print_json(&serde_json::json!({}), pretty)
            }
        },
    }
}
