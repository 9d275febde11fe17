//! Wait-schedule strategy — the main extension point for smarter planning.
//!
//! The default [`GreedyWait`] is a single deterministic greedy pass, not an
//! optimal scheduler: it finds *a* low-encounter wait placement, not
//! necessarily the minimum over all placements.  Implement [`WaitStrategy`]
//! to substitute a stronger search (e.g. exhaustive over wait placements,
//! bounded by the budget) without touching the rest of the pipeline.

use ev_core::{MissionParams, SiteId};
use ev_graph::TravelNetwork;

use crate::schedule::SightingSchedule;
use crate::trip::{TripOutcome, simulate_trip};
use crate::SimResult;

/// Pluggable wait-schedule planner.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so candidate routes can be
/// evaluated in parallel (the `parallel` feature of this crate).
pub trait WaitStrategy: Send + Sync {
    /// Simulate `route` under some waiting policy and return its outcome.
    ///
    /// Returns [`SimError::DeadlineExceeded`][crate::SimError] if no
    /// attempt this strategy is willing to make meets the deadline.
    fn plan(
        &self,
        route: &[SiteId],
        net: &TravelNetwork,
        params: &MissionParams,
        schedule: &SightingSchedule,
    ) -> SimResult<TripOutcome>;
}

/// Two-phase greedy waiting.
///
/// Phase one simulates with a zero waiting budget to learn the route's
/// unconstrained arrival day.  If slack remains before the deadline, phase
/// two re-simulates once with that slack as the budget, greedily spending
/// it to shift arrivals off hot days.
pub struct GreedyWait;

impl WaitStrategy for GreedyWait {
    fn plan(
        &self,
        route: &[SiteId],
        net: &TravelNetwork,
        params: &MissionParams,
        schedule: &SightingSchedule,
    ) -> SimResult<TripOutcome> {
        let dry = simulate_trip(route, net, params, schedule, 0)?;

        // Slack is measured against the last *allowed* arrival day, which
        // under an exclusive deadline is one day before the deadline itself.
        let slack = params.latest_arrival_day().saturating_sub(dry.days);
        if slack == 0 {
            return Ok(dry);
        }
        // The dry outcome is already feasible; never let the second pass
        // lose it.
        match simulate_trip(route, net, params, schedule, slack) {
            Ok(wet) => Ok(wet),
            Err(_) => Ok(dry),
        }
    }
}
