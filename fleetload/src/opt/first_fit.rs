use crate::entities::{AllocProblem, Location, Transfer};
use itertools::Itertools;
use log::{debug, info};
use std::time::Instant;

/// Priority-ordered first-fit allocation of the pending pool.
///
/// Pending requests are visited from high to low priority (pool order among equal priorities).
/// Each one is placed on the first vehicle, in fleet order, with enough remaining capacity.
/// Requests that fit nowhere stay pending.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitAllocator;

impl FirstFitAllocator {
    pub fn solve(&self, problem: &mut AllocProblem) -> AutoAllocReport {
        let start = Instant::now();

        let order = problem
            .pending()
            .iter()
            .copied()
            .sorted_by_key(|&r| problem.instance.request(r).priority)
            .collect_vec();
        let n_candidates = order.len();

        let mut placed = vec![];
        for request_id in order {
            let target = problem
                .allocations_in_order()
                .map(|a| a.vehicle_id)
                .find(|&v| problem.can_allocate(request_id, v));

            if let Some(vehicle_id) = target {
                let transfer =
                    Transfer::new(request_id, Location::Pending, Location::Vehicle(vehicle_id));
                if problem.transfer(transfer).is_ok() {
                    debug!(
                        "[FF] placed request {} on vehicle {}",
                        problem.instance.request(request_id).number,
                        problem.instance.vehicle(vehicle_id).plate
                    );
                    placed.push((request_id, vehicle_id));
                }
            }
        }

        let report = AutoAllocReport {
            placed,
            remaining: problem.pending().to_vec(),
        };

        info!(
            "[FF] allocated {}/{} pending requests in {:.3}ms",
            report.placed.len(),
            n_candidates,
            start.elapsed().as_secs_f64() * 1000.0
        );

        report
    }
}

/// Result of an automatic allocation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoAllocReport {
    /// Placed requests with the vehicle they were placed on, in placement order
    pub placed: Vec<(usize, usize)>,
    /// Requests still in the pending pool afterwards
    pub remaining: Vec<usize>,
}
