use crate::entities::{Allocation, Instance, Load, Location, VehicleStatus};
use crate::util::AllocConfig;
use std::time::Instant;

/// Represents a snapshot of an [`AllocProblem`](crate::entities::AllocProblem) at a specific moment.
/// Solutions can be used to restore the state of a problem to a previous state.
#[derive(Debug, Clone)]
pub struct AllocSolution {
    /// Copies of all open allocations, in vehicle order
    pub allocations: Vec<Allocation>,
    /// Pending pool, in pool order
    pub pending: Vec<usize>,
    /// Location of every request, `None` for requests the allocator does not manage
    pub locations: Vec<Option<Location>>,
    /// Status of every vehicle at the moment of the snapshot
    pub vehicle_statuses: Vec<VehicleStatus>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl AllocSolution {
    pub fn allocation(&self, vehicle_id: usize) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.vehicle_id == vehicle_id)
    }

    /// Total load assigned across all vehicles
    pub fn allocated_load(&self) -> Load {
        self.allocations.iter().map(|a| a.total()).sum()
    }

    pub fn n_allocated(&self) -> usize {
        self.allocations.iter().map(|a| a.len()).sum()
    }

    /// Fraction of the combined weight capacity of all open allocations that is in use
    pub fn weight_usage(&self) -> f64 {
        let capacity: f64 = self.allocations.iter().map(|a| a.capacity.weight).sum();
        match capacity > 0.0 {
            true => self.allocated_load().weight / capacity,
            false => 0.0,
        }
    }

    /// Whether two snapshots describe the same allocation state, regardless of when they were taken
    pub fn same_state(&self, other: &AllocSolution) -> bool {
        self.allocations == other.allocations
            && self.pending == other.pending
            && self.locations == other.locations
            && self.vehicle_statuses == other.vehicle_statuses
    }

    pub fn n_warnings(&self, instance: &Instance, config: &AllocConfig) -> usize {
        self.allocations
            .iter()
            .map(|a| a.warnings(instance, config).len())
            .sum()
    }
}
