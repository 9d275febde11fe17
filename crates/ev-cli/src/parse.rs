//! Query-line parsing.
//!
//! # Input format
//!
//! One query is four lines:
//!
//! ```text
//! 6
//! theta-delta:6, delta-echo:4, delta-hotel:1, hotel-echo:1, theta-hotel:6
//! 8
//! hotel:6, hotel:7, hotel:8
//! ```
//!
//! 1. fuel range (positive integer days),
//! 2. route list — `A-B:W` triples, comma-separated,
//! 3. deadline (positive integer days),
//! 4. sighting list — `Site:Day` pairs, comma-separated; may be empty.
//!
//! Site names may not contain `-` or `:`.

use ev_core::{EvError, EvResult};

/// One parsed route-list entry; names are resolved to `SiteId`s only once
/// the network is built.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub days: u32,
}

/// Parse a lone positive integer line (fuel range, deadline).
pub fn parse_positive(line: &str, what: &str) -> EvResult<u32> {
    let value: u32 = line
        .trim()
        .parse()
        .map_err(|_| EvError::Parse(format!("{what}: expected a positive integer, got {line:?}")))?;
    if value == 0 {
        return Err(EvError::Parse(format!("{what} must be positive")));
    }
    Ok(value)
}

/// Parse the comma-separated route list.
pub fn parse_routes(line: &str) -> EvResult<Vec<RouteLeg>> {
    line.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_leg)
        .collect()
}

fn parse_leg(part: &str) -> EvResult<RouteLeg> {
    let bad = || EvError::Parse(format!("route leg {part:?}: expected \"A-B:W\""));
    let (pair, days) = part.split_once(':').ok_or_else(bad)?;
    let (from, to) = pair.split_once('-').ok_or_else(bad)?;
    if from.is_empty() || to.is_empty() {
        return Err(bad());
    }
    Ok(RouteLeg {
        from: from.to_owned(),
        to: to.to_owned(),
        days: days.trim().parse().map_err(|_| bad())?,
    })
}

/// Parse the comma-separated sighting list into `(site name, day)` pairs.
/// An empty line is a valid empty schedule.
pub fn parse_sightings(line: &str) -> EvResult<Vec<(String, u32)>> {
    line.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let bad = || EvError::Parse(format!("sighting {part:?}: expected \"Site:Day\""));
            let (site, day) = part.split_once(':').ok_or_else(bad)?;
            if site.is_empty() {
                return Err(bad());
            }
            let day: u32 = day.trim().parse().map_err(|_| bad())?;
            Ok((site.to_owned(), day))
        })
        .collect()
}
