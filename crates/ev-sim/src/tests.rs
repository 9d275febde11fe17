//! Unit tests for ev-sim.

#[cfg(test)]
mod helpers {
    use ev_core::MissionParams;
    use ev_graph::{TravelNetwork, TravelNetworkBuilder};

    use crate::schedule::{Sighting, SightingSchedule};

    /// The five-site reference network (all legs within a fuel range of 6):
    ///
    /// ```text
    /// theta —6— delta —4— echo
    ///   \        |        /
    ///    6       1       1
    ///     \      |      /
    ///      ——— hotel ——
    /// ```
    ///
    /// Shortest theta→echo is 7 days via hotel but costs 8 elapsed days
    /// (the 6-day first leg drains the tank, forcing a refuel day).  The
    /// 8-day detour via delta also takes 8 elapsed days; its refuel stop
    /// happens at delta instead of hotel.
    pub fn reference_network() -> TravelNetwork {
        let mut b = TravelNetworkBuilder::new(6);
        b.add_route("theta", "delta", 6).unwrap();
        b.add_route("delta", "echo", 4).unwrap();
        b.add_route("delta", "hotel", 1).unwrap();
        b.add_route("hotel", "echo", 1).unwrap();
        b.add_route("theta", "hotel", 6).unwrap();
        b.build()
    }

    pub fn mission(deadline: u32) -> MissionParams {
        MissionParams::new(6, deadline)
    }

    /// Adversaries camped on hotel for days 6..=8 — every reachable route
    /// passes through or next to them.
    pub fn hotel_watch(net: &TravelNetwork) -> SightingSchedule {
        let hotel = net.site("hotel").unwrap();
        SightingSchedule::new([6, 7, 8].map(|day| Sighting { site: hotel, day }))
    }
}

// ── Odds math ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod odds {
    use crate::{capture_probability, success_percentage};

    #[test]
    fn capture_probability_values() {
        assert_eq!(capture_probability(0), 0.0);
        assert!((capture_probability(1) - 0.1).abs() < 1e-12);
        assert!((capture_probability(2) - 0.19).abs() < 1e-12);
        assert!((capture_probability(3) - 0.271).abs() < 1e-12);
    }

    #[test]
    fn success_percentage_values() {
        assert_eq!(success_percentage(0), 100);
        assert_eq!(success_percentage(1), 90);
        assert_eq!(success_percentage(2), 81);
        assert_eq!(success_percentage(3), 73);
    }

    #[test]
    fn success_percentage_strictly_decreasing() {
        for k in 0..40 {
            assert!(
                success_percentage(k) > success_percentage(k + 1)
                    || success_percentage(k + 1) == 0,
                "not decreasing at k={k}"
            );
        }
    }
}

// ── Sighting schedule ─────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use std::io::Cursor;

    use crate::schedule::{Sighting, SightingSchedule, load_sightings_reader};
    use crate::SimError;

    #[test]
    fn exact_match_lookup() {
        let net = super::helpers::reference_network();
        let hotel = net.site("hotel").unwrap();
        let sched = SightingSchedule::new([Sighting { site: hotel, day: 6 }]);

        assert!(sched.is_hot(hotel, 6));
        assert!(!sched.is_hot(hotel, 7));
        assert!(!sched.is_hot(net.site("echo").unwrap(), 6));
        assert_eq!(sched.len(), 1);
    }

    #[test]
    fn empty_schedule_is_never_hot() {
        let net = super::helpers::reference_network();
        let sched = SightingSchedule::empty();
        assert!(sched.is_empty());
        for site in net.sites() {
            assert!(!sched.is_hot(site, 1));
        }
    }

    #[test]
    fn csv_loader_resolves_names() {
        let net = super::helpers::reference_network();
        let csv = "site,day\nhotel,6\nhotel,7\necho,3\n";
        let sched = load_sightings_reader(Cursor::new(csv), &net).unwrap();

        let hotel = net.site("hotel").unwrap();
        assert_eq!(sched.len(), 3);
        assert!(sched.is_hot(hotel, 6));
        assert!(sched.is_hot(net.site("echo").unwrap(), 3));
    }

    #[test]
    fn csv_loader_rejects_unknown_site() {
        let net = super::helpers::reference_network();
        let csv = "site,day\nnowhere,2\n";
        let err = load_sightings_reader(Cursor::new(csv), &net).unwrap_err();
        assert!(matches!(err, SimError::UnknownSiteName(name) if name == "nowhere"));
    }
}

// ── Trip simulation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod trip {
    use ev_core::{DeadlineRule, SiteId};

    use crate::schedule::{Sighting, SightingSchedule};
    use crate::{SimError, simulate_trip};

    fn route(net: &ev_graph::TravelNetwork, names: &[&str]) -> Vec<SiteId> {
        names.iter().map(|n| net.site(n).unwrap()).collect()
    }

    #[test]
    fn refuel_day_is_counted() {
        let net = super::helpers::reference_network();
        let params = super::helpers::mission(10);
        let path = route(&net, &["theta", "hotel", "echo"]);

        // 6 days to hotel empties the tank; the 1-day hop to echo forces a
        // refuel day first: 6 + 1 + 1 = 8 elapsed days for a 7-day route.
        let outcome =
            simulate_trip(&path, &net, &params, &SightingSchedule::empty(), 0).unwrap();
        assert_eq!(outcome.days, 8);
        assert_eq!(outcome.encounters, 0);
    }

    #[test]
    fn refuel_stop_can_be_spotted() {
        let net = super::helpers::reference_network();
        let params = super::helpers::mission(10);
        let path = route(&net, &["theta", "hotel", "echo"]);
        let sched = super::helpers::hotel_watch(&net);

        // Arrival at hotel on day 6 and the refuel day 7 both coincide with
        // sightings.
        let outcome = simulate_trip(&path, &net, &params, &sched, 0).unwrap();
        assert_eq!(outcome.days, 8);
        assert_eq!(outcome.encounters, 2);
    }

    #[test]
    fn waiting_dodges_a_hot_arrival() {
        let mut b = ev_graph::TravelNetworkBuilder::new(6);
        b.add_route("alpha", "bravo", 2).unwrap();
        let net = b.build();
        let bravo = net.site("bravo").unwrap();
        let sched = SightingSchedule::new([Sighting { site: bravo, day: 2 }]);
        let params = super::helpers::mission(10);
        let path = route(&net, &["alpha", "bravo"]);

        let caught = simulate_trip(&path, &net, &params, &sched, 0).unwrap();
        assert_eq!((caught.days, caught.encounters), (2, 1));

        // One waiting day shifts arrival to day 3, clear of the sighting.
        let clear = simulate_trip(&path, &net, &params, &sched, 1).unwrap();
        assert_eq!((clear.days, clear.encounters), (3, 0));
    }

    #[test]
    fn deadline_violation_fails_fast() {
        let net = super::helpers::reference_network();
        let params = super::helpers::mission(7);
        let path = route(&net, &["theta", "hotel", "echo"]);

        let err =
            simulate_trip(&path, &net, &params, &SightingSchedule::empty(), 0).unwrap_err();
        assert!(matches!(
            err,
            SimError::DeadlineExceeded { days: 8, deadline: 7 }
        ));
    }

    #[test]
    fn exclusive_rule_rejects_arrival_on_deadline_day() {
        let net = super::helpers::reference_network();
        let mut params = super::helpers::mission(8);
        let path = route(&net, &["theta", "hotel", "echo"]);

        // Inclusive (default): arriving on day 8 with deadline 8 is fine.
        assert!(simulate_trip(&path, &net, &params, &SightingSchedule::empty(), 0).is_ok());

        params.deadline_rule = DeadlineRule::Exclusive;
        assert!(matches!(
            simulate_trip(&path, &net, &params, &SightingSchedule::empty(), 0),
            Err(SimError::DeadlineExceeded { .. })
        ));
    }
}

// ── Greedy wait strategy ──────────────────────────────────────────────────────

#[cfg(test)]
mod wait {
    use ev_core::SiteId;

    use crate::schedule::{Sighting, SightingSchedule};
    use crate::{GreedyWait, WaitStrategy};

    #[test]
    fn slack_is_spent_on_waiting() {
        let mut b = ev_graph::TravelNetworkBuilder::new(6);
        b.add_route("alpha", "bravo", 2).unwrap();
        let net = b.build();
        let bravo = net.site("bravo").unwrap();
        let sched = SightingSchedule::new([Sighting { site: bravo, day: 2 }]);
        let params = super::helpers::mission(5);
        let path: Vec<SiteId> = vec![net.site("alpha").unwrap(), bravo];

        // Dry run arrives day 2 with one encounter; slack 3 lets the second
        // pass delay departure and arrive clean on day 3.
        let outcome = GreedyWait.plan(&path, &net, &params, &sched).unwrap();
        assert_eq!((outcome.days, outcome.encounters), (3, 0));
    }

    #[test]
    fn no_slack_returns_dry_run() {
        let mut b = ev_graph::TravelNetworkBuilder::new(6);
        b.add_route("alpha", "bravo", 2).unwrap();
        let net = b.build();
        let bravo = net.site("bravo").unwrap();
        let sched = SightingSchedule::new([Sighting { site: bravo, day: 2 }]);
        let params = super::helpers::mission(2);
        let path: Vec<SiteId> = vec![net.site("alpha").unwrap(), bravo];

        let outcome = GreedyWait.plan(&path, &net, &params, &sched).unwrap();
        assert_eq!((outcome.days, outcome.encounters), (2, 1));
    }

    #[test]
    fn exclusive_rule_grants_one_day_less_slack() {
        let mut b = ev_graph::TravelNetworkBuilder::new(6);
        b.add_route("alpha", "bravo", 2).unwrap();
        let net = b.build();
        let bravo = net.site("bravo").unwrap();
        let sched = SightingSchedule::new([Sighting { site: bravo, day: 2 }]);
        let path: Vec<SiteId> = vec![net.site("alpha").unwrap(), bravo];

        // Exclusive deadline 3: day 3 is already too late, so there is no
        // slack to wait with.  The dry outcome (arrive day 2, spotted) must
        // survive rather than being lost to an over-budget second pass.
        let mut params = super::helpers::mission(3);
        params.deadline_rule = ev_core::DeadlineRule::Exclusive;
        let outcome = GreedyWait.plan(&path, &net, &params, &sched).unwrap();
        assert_eq!((outcome.days, outcome.encounters), (2, 1));

        // Exclusive deadline 4: one real day of slack, spent dodging the
        // sighting.
        let mut params = super::helpers::mission(4);
        params.deadline_rule = ev_core::DeadlineRule::Exclusive;
        let outcome = GreedyWait.plan(&path, &net, &params, &sched).unwrap();
        assert_eq!((outcome.days, outcome.encounters), (3, 0));
    }
}

// ── End-to-end evaluation ─────────────────────────────────────────────────────

#[cfg(test)]
mod evaluator {
    use ev_core::DeadlineRule;
    use ev_graph::multi_path_distances;

    use crate::schedule::SightingSchedule;
    use crate::{GreedyWait, best_success_odds};

    fn odds(deadline: u32, watched: bool) -> u32 {
        let net = super::helpers::reference_network();
        let theta = net.site("theta").unwrap();
        let echo = net.site("echo").unwrap();
        let table = multi_path_distances(&net, theta);
        let params = super::helpers::mission(deadline);
        let sched = if watched {
            super::helpers::hotel_watch(&net)
        } else {
            SightingSchedule::empty()
        };
        best_success_odds(&table, &net, echo, &params, &sched, &GreedyWait)
    }

    #[test]
    fn clear_skies_within_deadline() {
        assert_eq!(odds(8, false), 100);
    }

    #[test]
    fn deadline_too_tight_is_no_solution() {
        // The 7-day route needs 8 elapsed days (refuel), and no other
        // candidate fits either.
        assert_eq!(odds(7, false), 0);
    }

    #[test]
    fn unavoidable_encounters_reduce_odds() {
        // Deadline 8 leaves no slack: the best any route manages under the
        // watch is two encounters (arrival + refuel at hotel).
        assert_eq!(odds(8, true), 81);
    }

    #[test]
    fn one_day_of_slack_buys_an_escape() {
        // The 8-day detour via delta arrives at hotel on day 8... still hot,
        // but its refuel happens at delta: one encounter total.
        assert_eq!(odds(9, true), 90);
    }

    #[test]
    fn enough_slack_avoids_everyone() {
        assert_eq!(odds(10, true), 100);
    }

    #[test]
    fn unreachable_destination_is_zero() {
        let mut b = ev_graph::TravelNetworkBuilder::new(6);
        b.add_route("alpha", "bravo", 2).unwrap();
        b.add_route("x", "y", 3).unwrap();
        let net = b.build();
        let table = multi_path_distances(&net, net.site("alpha").unwrap());
        let params = super::helpers::mission(10);
        let result = best_success_odds(
            &table,
            &net,
            net.site("x").unwrap(),
            &params,
            &SightingSchedule::empty(),
            &GreedyWait,
        );
        assert_eq!(result, 0);
    }

    #[test]
    fn exclusive_rule_keeps_a_viable_unwaited_candidate() {
        // Arriving on day 2 under an exclusive deadline of 3 is fine; the
        // one encounter there should price the query at 90, not discard the
        // route as infeasible.
        let mut b = ev_graph::TravelNetworkBuilder::new(6);
        b.add_route("alpha", "bravo", 2).unwrap();
        let net = b.build();
        let alpha = net.site("alpha").unwrap();
        let bravo = net.site("bravo").unwrap();
        let table = multi_path_distances(&net, alpha);
        let mut params = super::helpers::mission(3);
        params.deadline_rule = DeadlineRule::Exclusive;
        let sched = SightingSchedule::new([crate::schedule::Sighting { site: bravo, day: 2 }]);

        let result = best_success_odds(&table, &net, bravo, &params, &sched, &GreedyWait);
        assert_eq!(result, 90);
    }

    #[test]
    fn exclusive_rule_shrinks_the_candidate_set() {
        let net = super::helpers::reference_network();
        let theta = net.site("theta").unwrap();
        let echo = net.site("echo").unwrap();
        let table = multi_path_distances(&net, theta);
        let mut params = super::helpers::mission(8);
        params.deadline_rule = DeadlineRule::Exclusive;

        // Only the 7-day route passes the distance filter under `<`, and its
        // 8 elapsed days then miss the deadline in simulation.
        let result = best_success_odds(
            &table,
            &net,
            echo,
            &params,
            &SightingSchedule::empty(),
            &GreedyWait,
        );
        assert_eq!(result, 0);
    }
}
