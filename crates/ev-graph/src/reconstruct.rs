//! Route recovery from the multi-path distance table.
//!
//! The table is lossy: each record stores only a total and a predecessor,
//! not the full path or the leg it arrived by.  Reconstruction walks
//! backward from the destination, at each step looking for a record at the
//! current site whose total equals the distance still unaccounted for.
//!
//! A site pair may be connected by parallel legs of different lengths (the
//! builder does not dedupe routes), so the leg taken backward cannot simply
//! be "the first hop to the predecessor": it must be one whose length is
//! consistent with a recorded total at the predecessor.  Because every
//! stored total was produced by extending some predecessor record by one
//! leg, such a pairing exists for any total drawn from the same table; its
//! absence is a caller bug surfaced as [`GraphError::NoMatchingRecord`].

use ev_core::SiteId;

use crate::network::TravelNetwork;
use crate::table::{DistRecord, DistanceTable};
use crate::{GraphError, GraphResult};

/// Recover a concrete site sequence (source first, destination last) whose
/// leg sum equals `target.total`.
///
/// `target` must be a record taken from `table`'s entry at `dest`.  When
/// several records share a total at an intermediate site, the first in
/// stored (append) order wins; when parallel legs both fit, the first in
/// adjacency order wins — reconstruction is deterministic.
pub fn reconstruct_route(
    table: &DistanceTable,
    net: &TravelNetwork,
    dest: SiteId,
    target: DistRecord,
) -> GraphResult<Vec<SiteId>> {
    let mut route = vec![dest];

    // Destination == source: the zero record reconstructs to a lone site.
    if target.is_source() {
        return Ok(route);
    }

    let mut current = dest;
    let mut record = target;
    let mut remaining = target.total;

    loop {
        remaining = consistent_leg(table, net, current, record.prev, remaining)?;
        current = record.prev;
        route.push(current);
        if remaining == 0 {
            break;
        }

        let entry = table.entry(current).ok_or(GraphError::NoMatchingRecord {
            site: current,
            remaining,
        })?;
        record = *entry
            .all
            .iter()
            .find(|r| r.total == remaining)
            .ok_or(GraphError::NoMatchingRecord {
                site: current,
                remaining,
            })?;
    }

    route.reverse();
    Ok(route)
}

/// Pick the leg to walk backward from `from` to `prev` when `from` is
/// reachable in `total` days: the first leg (adjacency order) whose length
/// leaves a remainder that `prev` has on record.  The source's entry holds
/// the zero record, so an exact-length final leg resolves there naturally.
fn consistent_leg(
    table: &DistanceTable,
    net: &TravelNetwork,
    from: SiteId,
    prev: SiteId,
    total: u32,
) -> GraphResult<u32> {
    let mut adjacent = false;
    for hop in net.neighbors(from)?.iter().filter(|h| h.to == prev) {
        adjacent = true;
        let Some(rem) = total.checked_sub(hop.days) else {
            continue;
        };
        let on_record = table
            .entry(prev)
            .is_some_and(|e| e.all.iter().any(|r| r.total == rem));
        if on_record {
            return Ok(rem);
        }
    }

    if !adjacent {
        return Err(GraphError::NoDirectRoute { from, to: prev });
    }
    Err(GraphError::NoMatchingRecord {
        site: from,
        remaining: total,
    })
}
