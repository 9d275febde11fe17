//! Adversary sighting schedule.
//!
//! A sighting is an exact `(site, day)` pair, not a probability distribution
//! over locations — the lookup is pure set membership.  The schedule is
//! built once per query and read-only afterward.
//!
//! # CSV format
//!
//! [`load_sightings_csv`] accepts one row per sighting:
//!
//! ```csv
//! site,day
//! hotel,6
//! hotel,7
//! hotel,8
//! ```
//!
//! Site names are resolved against the network at load time; an unknown
//! name fails with [`SimError::UnknownSiteName`].  A sighting at a site the
//! vehicle can never visit would simply never match, but a typo should
//! surface when the file is read, not as silently perfect odds.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;

use ev_core::SiteId;
use ev_graph::TravelNetwork;

use crate::{SimError, SimResult};

// ── Sighting ──────────────────────────────────────────────────────────────────

/// One recorded adversary presence: a site on a specific day.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sighting {
    pub site: SiteId,
    /// Day the adversary is present (1-based; day 0 is departure).
    pub day: u32,
}

// ── SightingSchedule ──────────────────────────────────────────────────────────

/// The full sighting schedule for one query.
#[derive(Clone, Debug, Default)]
pub struct SightingSchedule {
    lookup: FxHashSet<(SiteId, u32)>,
}

impl SightingSchedule {
    pub fn new(sightings: impl IntoIterator<Item = Sighting>) -> Self {
        Self {
            lookup: sightings.into_iter().map(|s| (s.site, s.day)).collect(),
        }
    }

    /// An empty schedule: no adversaries anywhere, ever.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `true` if an adversary is recorded at `site` on `day`.
    #[inline]
    pub fn is_hot(&self, site: SiteId, day: u32) -> bool {
        self.lookup.contains(&(site, day))
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SightingRecord {
    site: String,
    day: u32,
}

/// Load a sighting schedule from a CSV file, resolving site names against
/// `net`.
pub fn load_sightings_csv(path: &Path, net: &TravelNetwork) -> SimResult<SightingSchedule> {
    let file = std::fs::File::open(path).map_err(SimError::Io)?;
    load_sightings_reader(file, net)
}

/// Like [`load_sightings_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_sightings_reader<R: Read>(
    reader: R,
    net: &TravelNetwork,
) -> SimResult<SightingSchedule> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut sightings = Vec::new();

    for result in csv_reader.deserialize::<SightingRecord>() {
        let row = result.map_err(|e| SimError::Parse(e.to_string()))?;
        let site = net
            .site(&row.site)
            .ok_or_else(|| SimError::UnknownSiteName(row.site.clone()))?;
        sightings.push(Sighting {
            site,
            day: row.day,
        });
    }

    Ok(SightingSchedule::new(sightings))
}
