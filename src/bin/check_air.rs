//! Check Air Quality
//!
//! Evaluates one set of readings given as `KEY=VALUE` arguments and prints
//! the report.
//!
//! Run with: cargo run --bin check_air -- CO2=55 NO2=30 SO2=10 Dust=20
//! Add `--json` for JSON output.

use std::env;

use anyhow::{bail, Context};
use air_quality_checker::{evaluate, JsonFormatter, MarkdownFormatter, RawReading};

fn main() -> anyhow::Result<()> {
    let mut as_json = false;
    let mut pairs = Vec::new();

    for arg in env::args().skip(1) {
        if arg == "--json" {
            as_json = true;
            continue;
        }
        let Some((key, value)) = arg.split_once('=') else {
            bail!("Expected KEY=VALUE, got {:?}", arg);
        };
        // Reject typos in identifiers here; values stay lenient
        key.parse::<air_quality_checker::Pollutant>()
            .with_context(|| format!("Invalid argument {:?}", arg))?;
        pairs.push((key.to_string(), value.to_string()));
    }

    let report = evaluate(&RawReading::from_pairs(pairs));

    if as_json {
        println!("{}", JsonFormatter::format(&report)?);
    } else {
        print!("{}", MarkdownFormatter::format(&report));
    }

    Ok(())
}
