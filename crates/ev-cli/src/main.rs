//! ev-odds — best-odds query front-end.
//!
//! Reads one four-line query from stdin (see [`parse`]) and prints a single
//! integer in `[0, 100]`: the best achievable success percentage for
//! reaching the destination undetected.
//!
//! Usage: `ev-odds <source> <destination> < query.txt`
//!
//! Any failure — malformed input, unknown sites, no feasible route —
//! degrades to the sentinel `0` with exit code 0.  The caller distinguishes
//! "no solution" from "some solution" by the value alone.

mod parse;

use std::io::{BufRead, stdin};

use anyhow::{Context, Result, bail};

use ev_core::MissionParams;
use ev_graph::{TravelNetworkBuilder, multi_path_distances};
use ev_sim::{GreedyWait, Sighting, SightingSchedule, best_success_odds};

fn main() {
    match run() {
        Ok(percentage) => println!("{percentage}"),
        Err(_) => println!("0"),
    }
}

fn run() -> Result<u32> {
    let mut args = std::env::args().skip(1);
    let (Some(source_name), Some(dest_name)) = (args.next(), args.next()) else {
        bail!("usage: ev-odds <source> <destination>");
    };

    // ── Read the four query lines ─────────────────────────────────────────
    let mut lines = stdin().lock().lines();
    let mut next_line = |what: &str| -> Result<String> {
        lines
            .next()
            .with_context(|| format!("missing input line: {what}"))?
            .context("stdin read failed")
    };
    let fuel_line = next_line("fuel range")?;
    let routes_line = next_line("route list")?;
    let deadline_line = next_line("deadline")?;
    // The sighting line may legitimately be absent or empty.
    let sightings_line = next_line("sighting list").unwrap_or_default();

    let fuel_range = parse::parse_positive(&fuel_line, "fuel range")?;
    let deadline = parse::parse_positive(&deadline_line, "deadline")?;
    let params = MissionParams::new(fuel_range, deadline);

    // ── Build the network ─────────────────────────────────────────────────
    let mut builder = TravelNetworkBuilder::new(fuel_range);
    for leg in parse::parse_routes(&routes_line)? {
        builder.add_route(&leg.from, &leg.to, leg.days)?;
    }
    let net = builder.build();

    let source = net
        .site(&source_name)
        .with_context(|| format!("source {source_name:?} not in network"))?;
    let dest = net
        .site(&dest_name)
        .with_context(|| format!("destination {dest_name:?} not in network"))?;

    // Sightings at sites the network never kept can never be encountered;
    // they are dropped rather than treated as errors.
    let sightings: Vec<Sighting> = parse::parse_sightings(&sightings_line)?
        .into_iter()
        .filter_map(|(name, day)| net.site(&name).map(|site| Sighting { site, day }))
        .collect();
    let schedule = SightingSchedule::new(sightings);

    // ── Evaluate ──────────────────────────────────────────────────────────
    let table = multi_path_distances(&net, source);
    Ok(best_success_odds(
        &table, &net, dest, &params, &schedule, &GreedyWait,
    ))
}
