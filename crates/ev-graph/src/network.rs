//! Travel network representation and builder.
//!
//! # Data layout
//!
//! Site names are interned: the builder assigns each distinct name a
//! sequential [`SiteId`] and keeps a `name → id` map (`FxHashMap`) alongside
//! the `id → name` table.  Adjacency is a `Vec<Vec<Hop>>` indexed by
//! `SiteId`, so the hot lookups in the distance computation are plain
//! indexed loads with no hashing.
//!
//! # Edge filter
//!
//! The builder is constructed with the vehicle's fuel range and drops any
//! leg longer than it at insertion time.  A leg no vehicle can traverse on
//! one tank is treated as nonexistent, not as a mid-leg refuel opportunity;
//! downstream, the trip simulator relies on this to model at most one
//! refuel stop per leg.  Sites mentioned only by dropped legs are not
//! interned — they never appear in the network at all.

use rustc_hash::FxHashMap;

use ev_core::SiteId;

use crate::{GraphError, GraphResult};

// ── Hop ───────────────────────────────────────────────────────────────────────

/// One adjacency entry: a directly reachable neighbor and the leg length.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hop {
    /// Neighboring site.
    pub to: SiteId,
    /// Travel days for this leg.  Always ≥ 1 and ≤ the fuel range.
    pub days: u32,
}

// ── TravelNetwork ─────────────────────────────────────────────────────────────

/// Undirected weighted travel graph over named sites.
///
/// Built once per query via [`TravelNetworkBuilder`] and immutable
/// thereafter.  Adjacency is symmetric: if `a` is adjacent to `b` with some
/// leg length, `b` is adjacent to `a` with the same length.
pub struct TravelNetwork {
    /// Site name for each `SiteId`.  Indexed by `SiteId`.
    names: Vec<String>,
    /// Reverse intern lookup.
    by_name: FxHashMap<String, SiteId>,
    /// Adjacency lists, indexed by `SiteId`.
    adjacency: Vec<Vec<Hop>>,
}

impl TravelNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn site_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterator over every site that appears in any kept leg.
    pub fn sites(&self) -> impl Iterator<Item = SiteId> + '_ {
        (0..self.names.len()).map(|i| SiteId(i as u32))
    }

    // ── Name interning ────────────────────────────────────────────────────

    /// Look up a site by name.  `None` if the name never appeared in a
    /// kept leg.
    pub fn site(&self, name: &str) -> Option<SiteId> {
        self.by_name.get(name).copied()
    }

    /// Name of an interned site.
    ///
    /// # Panics
    /// Panics if `site` was not produced by this network.
    pub fn site_name(&self, site: SiteId) -> &str {
        &self.names[site.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Adjacency list of `site`.
    pub fn neighbors(&self, site: SiteId) -> GraphResult<&[Hop]> {
        self.adjacency
            .get(site.index())
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownSite(site))
    }

    /// Leg length in days between two directly connected sites.
    pub fn leg_days(&self, from: SiteId, to: SiteId) -> GraphResult<u32> {
        self.neighbors(from)?
            .iter()
            .find(|hop| hop.to == to)
            .map(|hop| hop.days)
            .ok_or(GraphError::NoDirectRoute { from, to })
    }
}

// ── TravelNetworkBuilder ──────────────────────────────────────────────────────

/// Construct a [`TravelNetwork`] incrementally, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ev_graph::TravelNetworkBuilder;
///
/// let mut b = TravelNetworkBuilder::new(6);
/// b.add_route("alpha", "bravo", 4).unwrap();
/// b.add_route("bravo", "charlie", 9).unwrap(); // over fuel range: dropped
/// let net = b.build();
/// assert_eq!(net.site_count(), 2); // "charlie" never interned
/// ```
pub struct TravelNetworkBuilder {
    max_leg_days: u32,
    names: Vec<String>,
    by_name: FxHashMap<String, SiteId>,
    adjacency: Vec<Vec<Hop>>,
}

impl TravelNetworkBuilder {
    /// `max_leg_days` is the vehicle's fuel range; longer legs are dropped.
    pub fn new(max_leg_days: u32) -> Self {
        Self {
            max_leg_days,
            names: Vec::new(),
            by_name: FxHashMap::default(),
            adjacency: Vec::new(),
        }
    }

    /// Intern `name`, assigning the next sequential `SiteId` on first sight.
    fn intern(&mut self, name: &str) -> SiteId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = SiteId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.by_name.insert(name.to_owned(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Insert a bidirectional route of `days` travel days between `a` and
    /// `b`.
    ///
    /// Legs longer than the fuel range are silently skipped (treated as
    /// nonexistent).  A zero-day leg is a malformed route list and fails
    /// with [`GraphError::InvalidLegDays`].
    pub fn add_route(&mut self, a: &str, b: &str, days: u32) -> GraphResult<()> {
        if days == 0 {
            return Err(GraphError::InvalidLegDays {
                from: a.to_owned(),
                to: b.to_owned(),
            });
        }
        if days > self.max_leg_days {
            return Ok(());
        }
        let ida = self.intern(a);
        let idb = self.intern(b);
        self.adjacency[ida.index()].push(Hop { to: idb, days });
        self.adjacency[idb.index()].push(Hop { to: ida, days });
        Ok(())
    }

    pub fn site_count(&self) -> usize {
        self.names.len()
    }

    /// Consume the builder and produce an immutable [`TravelNetwork`].
    pub fn build(self) -> TravelNetwork {
        TravelNetwork {
            names: self.names,
            by_name: self.by_name,
            adjacency: self.adjacency,
        }
    }
}
