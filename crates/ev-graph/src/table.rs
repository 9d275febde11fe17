//! Multi-path single-source distance table.
//!
//! # Why not plain Dijkstra
//!
//! The trip simulator may be forced off the globally shortest route by
//! refueling and sighting-avoidance constraints that only surface during
//! simulation, so the planner must be able to retrieve *alternative* route
//! lengths to the destination, not only the optimum.  The table therefore
//! over-approximates: for every site it keeps the full, append-only list of
//! cumulative distances producible by composing already-finalized sites'
//! known distances with one more leg, alongside the usual best distance.
//!
//! # Algorithm
//!
//! Standard Dijkstra finalization order — repeatedly finalize the unvisited
//! site with the smallest best distance — but the relaxation step fans out:
//! when site `v` is finalized, **every** record in `v`'s list (not just the
//! best) is extended by one leg to each still-unvisited neighbor.  The
//! neighbor's best record is replaced only on a strictly smaller total; the
//! new record is appended regardless, duplicates included.
//!
//! Ties in the finalization order break toward the lowest `SiteId`, i.e.
//! intern (insertion) order, via the pure [`next_unvisited`] selector.
//!
//! # Lifetime
//!
//! The per-site record lists grow for the duration of one table build and
//! are never pruned — a bounded, single-query arena freed when the
//! `DistanceTable` is dropped.

use ev_core::SiteId;

use crate::network::TravelNetwork;

// ── Records ───────────────────────────────────────────────────────────────────

/// One way of reaching a site: a cumulative distance and the predecessor it
/// came through.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistRecord {
    /// Total travel days from the source along this way.
    pub total: u32,
    /// Site the final leg came from; [`SiteId::INVALID`] marks the source's
    /// own zero-distance record.
    pub prev: SiteId,
}

impl DistRecord {
    /// The zero-distance record held by the source.
    pub const SOURCE: DistRecord = DistRecord {
        total: 0,
        prev: SiteId::INVALID,
    };

    /// `true` for the source's own record (no predecessor).
    #[inline]
    pub fn is_source(&self) -> bool {
        self.prev == SiteId::INVALID
    }
}

/// All known ways of reaching one site.
///
/// Invariant: `best` is the minimum-total element of `all`.  `all` is in
/// append order — one entry per relaxation event, never deduplicated.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteEntry {
    pub best: DistRecord,
    pub all: Vec<DistRecord>,
}

impl SiteEntry {
    fn new(first: DistRecord) -> Self {
        Self {
            best: first,
            all: vec![first],
        }
    }

    /// Append a record, updating `best` on a strictly smaller total.
    fn push(&mut self, record: DistRecord) {
        if record.total < self.best.total {
            self.best = record;
        }
        self.all.push(record);
    }
}

// ── DistanceTable ─────────────────────────────────────────────────────────────

/// Result of one [`multi_path_distances`] run: one entry per site reachable
/// from the source, `None` for unreachable sites.  Never mutated after the
/// build.
pub struct DistanceTable {
    source: SiteId,
    entries: Vec<Option<SiteEntry>>,
}

impl DistanceTable {
    pub fn source(&self) -> SiteId {
        self.source
    }

    /// Entry for `site`, or `None` if it is unreachable from the source
    /// (or out of range for the network the table was built over).
    pub fn entry(&self, site: SiteId) -> Option<&SiteEntry> {
        self.entries.get(site.index()).and_then(Option::as_ref)
    }

    /// Best-known record for `site`, if reachable.
    pub fn best(&self, site: SiteId) -> Option<DistRecord> {
        self.entry(site).map(|e| e.best)
    }
}

// ── Computation ───────────────────────────────────────────────────────────────

/// Build the multi-path distance table for `source` over `net`.
///
/// Visits every site of the network exactly once.  A valid source always
/// ends up with the zero-distance record; a `source` id the network never
/// minted (including [`SiteId::INVALID`]) yields a table with no entries,
/// which callers already treat as "nothing reachable".
pub fn multi_path_distances(net: &TravelNetwork, source: SiteId) -> DistanceTable {
    let n = net.site_count();
    if source.index() >= n {
        return DistanceTable {
            source,
            entries: vec![None; n],
        };
    }
    let mut entries: Vec<Option<SiteEntry>> = vec![None; n];
    let mut visited = vec![false; n];

    entries[source.index()] = Some(SiteEntry::new(DistRecord::SOURCE));

    let mut remaining = n;
    let mut current = source;

    while remaining > 0 {
        // Fan-out relaxation: extend every known record of `current` by one
        // leg into each unvisited neighbor.  `current` may have no entry
        // when the fallback below picked an unreachable site; it then
        // relaxes nothing.
        let records: Vec<DistRecord> = match &entries[current.index()] {
            Some(entry) => entry.all.clone(),
            None => Vec::new(),
        };
        let hops = net.neighbors(current).unwrap_or(&[]);
        for hop in hops {
            if visited[hop.to.index()] {
                continue;
            }
            for r in &records {
                let record = DistRecord {
                    total: r.total + hop.days,
                    prev: current,
                };
                let slot = &mut entries[hop.to.index()];
                if let Some(entry) = slot {
                    entry.push(record);
                } else {
                    *slot = Some(SiteEntry::new(record));
                }
            }
        }

        visited[current.index()] = true;
        remaining -= 1;
        if remaining == 0 {
            break;
        }

        current = match next_unvisited(&entries, &visited) {
            Some(site) => site,
            // No unvisited site has an entry: the rest of the graph is
            // unreachable.  Consume sites in id order so the loop still
            // terminates; their entries stay `None`.
            None => match visited.iter().position(|&v| !v) {
                Some(i) => SiteId(i as u32),
                None => break,
            },
        };
    }

    DistanceTable { source, entries }
}

/// Select the unvisited site with the smallest best distance.
///
/// Pure function of the current entries and visited set — no hidden state —
/// so it can be tested in isolation.  Ties break toward the lowest
/// `SiteId`.  Returns `None` when no unvisited site has an entry yet.
pub fn next_unvisited(entries: &[Option<SiteEntry>], visited: &[bool]) -> Option<SiteId> {
    let mut found: Option<(u32, usize)> = None;
    for (i, entry) in entries.iter().enumerate() {
        if visited[i] {
            continue;
        }
        let Some(entry) = entry else { continue };
        match found {
            None => found = Some((entry.best.total, i)),
            Some((best, _)) if entry.best.total < best => {
                found = Some((entry.best.total, i));
            }
            Some(_) => {}
        }
    }
    found.map(|(_, i)| SiteId(i as u32))
}
