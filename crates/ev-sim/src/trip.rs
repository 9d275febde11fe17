//! Day-by-day trip simulation over a concrete route.
//!
//! # State variables
//!
//! The walk tracks two independent state variables — elapsed days and
//! remaining fuel — plus the encounter count and the waiting budget.  Every
//! day spent somewhere (refueling or waiting) can coincide with a sighting;
//! so can every arrival.
//!
//! # Refueling
//!
//! A leg longer than the remaining fuel forces exactly one refuel day at
//! the current site.  The network's edge filter guarantees every leg fits
//! in a full tank, so one stop per leg always suffices.
//!
//! # Waiting
//!
//! Before departing a leg, while budget remains and the projected arrival
//! day has a sighting at the next site, one day is spent waiting instead.
//! This is the greedy primitive; the schedule-level search lives in
//! [`crate::wait`].

use ev_core::{MissionParams, SiteId};
use ev_graph::TravelNetwork;

use crate::schedule::SightingSchedule;
use crate::{SimError, SimResult};

// ── TripOutcome ───────────────────────────────────────────────────────────────

/// Result of one simulated attempt.  Immutable once produced.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TripOutcome {
    /// Total elapsed days at arrival, including refuel and waiting days.
    pub days: u32,
    /// Arrival or refuel events that coincided with a sighting.
    pub encounters: u32,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// Walk `route` from its first site to its last, returning the outcome or
/// [`SimError::DeadlineExceeded`] as soon as the deadline rule is violated.
///
/// A failed attempt is abandoned, never retried internally; retry policy
/// (e.g. with a different waiting budget) belongs to the caller.
pub fn simulate_trip(
    route: &[SiteId],
    net: &TravelNetwork,
    params: &MissionParams,
    schedule: &SightingSchedule,
    wait_budget: u32,
) -> SimResult<TripOutcome> {
    let mut days = 0u32;
    let mut fuel = params.fuel_range;
    let mut encounters = 0u32;
    let mut budget = wait_budget;

    for leg in route.windows(2) {
        let (cur, next) = (leg[0], leg[1]);
        let distance = net.leg_days(cur, next)?;

        // Forced refuel: one day at `cur` on an empty-enough tank.
        if distance > fuel {
            days += 1;
            fuel = params.fuel_range;
            if schedule.is_hot(cur, days) {
                encounters += 1;
            }
        }

        // Greedy wait: delay departure while the projected arrival day is
        // hot and budget remains.
        while budget > 0 && schedule.is_hot(next, days + distance) {
            budget -= 1;
            days += 1;
        }

        days += distance;
        fuel -= distance;

        if schedule.is_hot(next, days) {
            encounters += 1;
        }

        if !params.within_deadline(days) {
            return Err(SimError::DeadlineExceeded {
                days,
                deadline: params.deadline,
            });
        }
    }

    Ok(TripOutcome { days, encounters })
}
