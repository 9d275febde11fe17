//! Mission parameters.
//!
//! # Design
//!
//! All domain time is an integer number of **days** — the deadline is a
//! domain value compared against simulated elapsed days, never wall-clock
//! time.  Integer days keep all schedule arithmetic exact and comparisons
//! O(1).
//!
//! The deadline boundary (is an arrival on exactly the deadline day still
//! feasible?) is an explicit configuration choice, [`DeadlineRule`], rather
//! than an implicit `<` vs `<=` buried in comparisons.  The default is
//! [`DeadlineRule::Inclusive`].

use std::fmt;

// ── DeadlineRule ──────────────────────────────────────────────────────────────

/// Whether arriving on exactly the deadline day counts as feasible.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeadlineRule {
    /// `days <= deadline` is feasible (the default).
    #[default]
    Inclusive,
    /// Only `days < deadline` is feasible.
    Exclusive,
}

impl DeadlineRule {
    /// `true` if a trip taking `days` days meets `deadline` under this rule.
    #[inline]
    pub fn allows(self, days: u32, deadline: u32) -> bool {
        match self {
            DeadlineRule::Inclusive => days <= deadline,
            DeadlineRule::Exclusive => days < deadline,
        }
    }

    /// Last arrival day that still meets `deadline` under this rule.
    #[inline]
    pub fn latest_day(self, deadline: u32) -> u32 {
        match self {
            DeadlineRule::Inclusive => deadline,
            DeadlineRule::Exclusive => deadline.saturating_sub(1),
        }
    }
}

impl fmt::Display for DeadlineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadlineRule::Inclusive => write!(f, "inclusive"),
            DeadlineRule::Exclusive => write!(f, "exclusive"),
        }
    }
}

// ── MissionParams ─────────────────────────────────────────────────────────────

/// Per-query mission configuration.
///
/// Cheap to copy; holds no heap data.  Built once per query by the
/// application and passed read-only through the pipeline.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionParams {
    /// Maximum days of travel between refuels.  Also the edge filter bound:
    /// a leg longer than this is unusable and never enters the network.
    pub fuel_range: u32,

    /// Total days available to reach the destination.
    pub deadline: u32,

    /// Boundary convention for the deadline comparison.
    pub deadline_rule: DeadlineRule,
}

impl MissionParams {
    /// Construct with the default (inclusive) deadline rule.
    pub fn new(fuel_range: u32, deadline: u32) -> Self {
        Self {
            fuel_range,
            deadline,
            deadline_rule: DeadlineRule::default(),
        }
    }

    /// `true` if a trip taking `days` days meets the deadline.
    #[inline]
    pub fn within_deadline(&self, days: u32) -> bool {
        self.deadline_rule.allows(days, self.deadline)
    }

    /// Last arrival day that still meets the deadline.
    #[inline]
    pub fn latest_arrival_day(&self) -> u32 {
        self.deadline_rule.latest_day(self.deadline)
    }
}
