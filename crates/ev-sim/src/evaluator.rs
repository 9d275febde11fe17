//! Candidate enumeration and best-outcome selection.
//!
//! # Propagation policy
//!
//! Per-candidate failures — `UnknownSite`, `NoDirectRoute`,
//! `NoMatchingRecord`, `DeadlineExceeded` — mean "this route contributes no
//! result" and are absorbed here; they never abort the query.  Only a total
//! absence of viable routes surfaces, as the sentinel `0`.  All candidates
//! are considered before the maximum is taken; no partial answer is ever
//! reported.

use ev_core::{MissionParams, SiteId};
use ev_graph::{DistRecord, DistanceTable, TravelNetwork, reconstruct_route};
use rustc_hash::FxHashSet;

use crate::odds::success_percentage;
use crate::schedule::SightingSchedule;
use crate::trip::TripOutcome;
use crate::wait::WaitStrategy;

/// Best achievable success percentage for reaching `dest`, in `[0, 100]`.
///
/// Enumerates every distinct destination total feasible under the deadline
/// rule (one candidate per total — duplicate records of the same total
/// reconstruct to the same leg sum and are skipped), simulates each via
/// `strategy`, and returns the maximum surviving percentage.
///
/// Short-circuits to `0` without simulating when the destination is
/// unreachable or its best distance already misses the deadline.
pub fn best_success_odds<S: WaitStrategy>(
    table: &DistanceTable,
    net: &TravelNetwork,
    dest: SiteId,
    params: &MissionParams,
    schedule: &SightingSchedule,
    strategy: &S,
) -> u32 {
    let Some(entry) = table.entry(dest) else {
        return 0;
    };
    if !params.within_deadline(entry.best.total) {
        return 0;
    }

    // First record per distinct total, in stored order.
    let mut seen: FxHashSet<u32> = FxHashSet::default();
    let candidates: Vec<DistRecord> = entry
        .all
        .iter()
        .filter(|r| params.within_deadline(r.total) && seen.insert(r.total))
        .copied()
        .collect();

    let simulate = |record: &DistRecord| -> Option<TripOutcome> {
        let route = reconstruct_route(table, net, dest, *record).ok()?;
        strategy.plan(&route, net, params, schedule).ok()
    };

    #[cfg(feature = "parallel")]
    let best = {
        use rayon::prelude::*;
        candidates
            .par_iter()
            .filter_map(simulate)
            .map(|outcome| success_percentage(outcome.encounters))
            .max()
    };

    #[cfg(not(feature = "parallel"))]
    let best = candidates
        .iter()
        .filter_map(simulate)
        .map(|outcome| success_percentage(outcome.encounters))
        .max();

    best.unwrap_or(0)
}
