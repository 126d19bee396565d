use crate::entities::{AllocProblem, AllocSolution, Load, LoadingRequest, Location, Vehicle};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn instance_ids_correct(vehicles: &[Vehicle], requests: &[LoadingRequest]) -> bool {
    vehicles.iter().enumerate().all(|(i, v)| v.id == i)
        && requests.iter().enumerate().all(|(i, r)| r.id == i)
}

pub fn problem_is_consistent(p: &AllocProblem) -> bool {
    allocations_match_vehicles(p)
        && allocations_within_capacity(p)
        && totals_match_requests(p)
        && requests_conserved(p)
}

/// Exactly the available vehicles have an open allocation, each pointing back to its vehicle
pub fn allocations_match_vehicles(p: &AllocProblem) -> bool {
    let n_keys = p.vehicle_keys.iter().flatten().count();
    if n_keys != p.allocations.len() {
        error!("{} allocation keys registered for {} allocations", n_keys, p.allocations.len());
        return false;
    }
    p.vehicle_keys.iter().enumerate().all(|(v_id, key)| {
        let vehicle = p.instance.vehicle(v_id);
        match key {
            Some(key) => vehicle.is_available() && p.allocations[*key].vehicle_id == v_id,
            None => !vehicle.is_available(),
        }
    })
}

pub fn allocations_within_capacity(p: &AllocProblem) -> bool {
    p.allocations.values().all(|a| {
        let fits = a.total().fits_within(&a.capacity);
        if !fits {
            error!(
                "allocation of vehicle {} holds {} with capacity {}",
                a.vehicle_id,
                a.total(),
                a.capacity
            );
        }
        fits
    })
}

/// Totals equal the demands summed in arrival order, and the arrivals are exactly the listed requests
pub fn totals_match_requests(p: &AllocProblem) -> bool {
    p.allocations.values().all(|a| {
        let same_requests = a.arrivals().iter().sorted().eq(a.requests().iter().sorted());
        if !same_requests {
            error!("arrivals of vehicle {} differ from its request list", a.vehicle_id);
            return false;
        }
        let summed: Load = a
            .arrivals()
            .iter()
            .map(|&r| p.instance.request(r).demand)
            .sum();
        approx_eq!(f64, summed.weight, a.total().weight, ulps = 4)
            && approx_eq!(f64, summed.volume, a.total().volume, ulps = 4)
    })
}

/// Every managed request sits in exactly one place, and that place is the one recorded for it
pub fn requests_conserved(p: &AllocProblem) -> bool {
    let mut seen = vec![0usize; p.instance.requests.len()];
    let pending_ok = p.pending.iter().all(|&r| {
        seen[r] += 1;
        p.locations[r] == Some(Location::Pending)
    });
    let allocated_ok = p.allocations.values().all(|a| {
        a.requests().iter().all(|&r| {
            seen[r] += 1;
            p.locations[r] == Some(Location::Vehicle(a.vehicle_id))
        })
    });
    let counts_ok = seen
        .iter()
        .zip(p.locations.iter())
        .all(|(count, loc)| match loc {
            Some(_) => *count == 1,
            None => *count == 0,
        });
    if !counts_ok {
        let offending = seen
            .iter()
            .positions(|&c| c > 1)
            .collect_vec();
        error!("requests present in more than one location: {offending:?}");
    }
    pending_ok && allocated_ok && counts_ok
}

pub fn problem_matches_solution(p: &AllocProblem, sol: &AllocSolution) -> bool {
    let AllocSolution {
        allocations,
        pending,
        locations,
        vehicle_statuses,
        time_stamp: _,
    } = sol;

    assert_eq!(p.pending(), pending.as_slice());
    assert_eq!(&p.locations, locations);
    assert_eq!(
        p.instance.vehicles.iter().map(|v| v.status).collect_vec(),
        *vehicle_statuses
    );
    assert_eq!(p.allocations.len(), allocations.len());

    p.allocations_in_order()
        .zip(allocations.iter())
        .all(|(a, snapshot)| a == snapshot)
}
