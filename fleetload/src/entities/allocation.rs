use crate::entities::{Instance, Load, Utilization, Vehicle};
use crate::util::AllocConfig;
use crate::util::capacity;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The ordered set of loading requests currently assigned to one vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// The vehicle this allocation belongs to
    pub vehicle_id: usize,
    /// Capacity of the vehicle, copied at creation (fixed within a session)
    pub capacity: Load,
    requests: Vec<usize>,
    /// Same requests in the order they were added, the order in which `total` is accumulated
    arrivals: Vec<usize>,
    total: Load,
}

impl Allocation {
    pub fn new(vehicle: &Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.id,
            capacity: vehicle.capacity,
            requests: vec![],
            arrivals: vec![],
            total: Load::ZERO,
        }
    }

    /// Ids of the assigned requests, in allocation order
    pub fn requests(&self) -> &[usize] {
        &self.requests
    }

    pub(crate) fn arrivals(&self) -> &[usize] {
        &self.arrivals
    }

    /// Sum of the demands of all assigned requests
    pub fn total(&self) -> Load {
        self.total
    }

    pub fn utilization(&self) -> Utilization {
        Utilization::new(&self.total, &self.capacity)
    }

    pub fn remaining(&self) -> Load {
        self.capacity - self.total
    }

    /// Whether a request with the given demand can be added without exceeding the capacity
    pub fn can_fit(&self, demand: &Load) -> bool {
        capacity::fits(&self.total, demand, &self.capacity)
    }

    pub fn contains(&self, request_id: usize) -> bool {
        self.requests.contains(&request_id)
    }

    pub fn position(&self, request_id: usize) -> Option<usize> {
        self.requests.iter().position(|&r| r == request_id)
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Inserts a request at `index` (clamped to the length) or at the end.
    /// Capacity is not checked here, that is the responsibility of the caller.
    pub(crate) fn insert(&mut self, request_id: usize, index: Option<usize>, instance: &Instance) {
        debug_assert!(!self.contains(request_id));
        let index = index.map_or(self.requests.len(), |i| i.min(self.requests.len()));
        self.requests.insert(index, request_id);
        self.arrivals.push(request_id);
        self.recompute(instance);
    }

    /// Removes a request, returning the position it occupied
    pub(crate) fn remove(&mut self, request_id: usize, instance: &Instance) -> Option<usize> {
        let pos = self.position(request_id)?;
        self.requests.remove(pos);
        self.arrivals.retain(|&r| r != request_id);
        self.recompute(instance);
        Some(pos)
    }

    /// Moves a request to another position within this allocation
    pub(crate) fn reorder(&mut self, request_id: usize, index: usize) -> bool {
        match self.position(request_id) {
            Some(pos) => {
                let r = self.requests.remove(pos);
                let index = index.min(self.requests.len());
                self.requests.insert(index, r);
                true
            }
            None => false,
        }
    }

    /// Removes all requests, returning them in allocation order
    pub(crate) fn drain(&mut self) -> Vec<usize> {
        self.total = Load::ZERO;
        self.arrivals.clear();
        std::mem::take(&mut self.requests)
    }

    //summed from scratch in arrival order: the position of a request in the list never affects the
    //total, and adding a request yields exactly `total + demand`, the value checked against capacity
    fn recompute(&mut self, instance: &Instance) {
        self.total = self
            .arrivals
            .iter()
            .map(|&r| instance.request(r).demand)
            .sum();
    }

    /// Conditions of this allocation worth bringing to the dispatcher's attention
    pub fn warnings(&self, instance: &Instance, config: &AllocConfig) -> Vec<AllocWarning> {
        let mut warnings = vec![];
        let near = config.near_limit_pct / 100.0;
        if self.capacity.weight > 0.0 && self.total.weight / self.capacity.weight > near {
            warnings.push(AllocWarning::WeightNearLimit);
        }
        if self.capacity.volume > 0.0 && self.total.volume / self.capacity.volume > near {
            warnings.push(AllocWarning::VolumeNearLimit);
        }
        let n_dates = self
            .requests
            .iter()
            .map(|&r| instance.request(r).requested_date)
            .unique()
            .count();
        if n_dates > 1 {
            warnings.push(AllocWarning::MixedDates);
        }
        warnings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocWarning {
    /// Weight utilization above the configured threshold
    WeightNearLimit,
    /// Volume utilization above the configured threshold
    VolumeNearLimit,
    /// The assigned requests do not share a single requested date
    MixedDates,
}

/// Read-only summary of an allocation, handed to listeners after every committed change.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationView {
    pub vehicle_id: usize,
    pub requests: Vec<usize>,
    pub total: Load,
    pub utilization: Utilization,
}

impl From<&Allocation> for AllocationView {
    fn from(a: &Allocation) -> Self {
        Self {
            vehicle_id: a.vehicle_id,
            requests: a.requests.clone(),
            total: a.total,
            utilization: a.utilization(),
        }
    }
}
