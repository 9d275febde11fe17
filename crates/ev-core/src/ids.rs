//! Strongly typed, zero-cost identifier wrapper.
//!
//! `SiteId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! collection element without ceremony.  The inner integer is `pub` to allow
//! direct indexing into per-site `Vec`s via `id.0 as usize`, but callers
//! should prefer the `.index()` helper for clarity.

use std::fmt;

/// Index of a site (named location) in the travel network's intern table.
///
/// Names are interned at network-build time, so two equal names always map
/// to the same `SiteId` and two different names never do — string identity
/// carries over to id identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteId(pub u32);

impl SiteId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.  Marks
    /// the predecessor of a source distance record.
    pub const INVALID: SiteId = SiteId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for SiteId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SiteId({})", self.0)
    }
}

impl From<SiteId> for usize {
    #[inline(always)]
    fn from(id: SiteId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for SiteId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<SiteId, Self::Error> {
        u32::try_from(n).map(SiteId)
    }
}
