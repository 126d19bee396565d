use crate::entities::{
    AllocSolution, Allocation, AllocationView, Instance, LoadingRequest, RequestFilter,
    RequestStatus, Vehicle, VehicleFilter, VehicleStatus,
};
use crate::error::AllocError;
use crate::util::assertions;
use crate::util::capacity;
use itertools::Itertools;
use log::{debug, info, warn};
use slotmap::{SlotMap, new_key_type};
use std::time::Instant;

new_key_type! {
    /// Unique key for each [`Allocation`] in an [`AllocProblem`]
    pub struct AllocKey;
}

/// Dynamic counterpart of [`Instance`]: requests can be allocated to vehicles, moved between them
/// and returned to the pending pool.
#[derive(Debug, Clone)]
pub struct AllocProblem {
    pub instance: Instance,
    pub(crate) allocations: SlotMap<AllocKey, Allocation>,
    /// Key of the open allocation of every vehicle, `None` for vehicles that are not available
    pub(crate) vehicle_keys: Vec<Option<AllocKey>>,
    pub(crate) pending: Vec<usize>,
    /// Location of every request, `None` for terminal requests
    pub(crate) locations: Vec<Option<Location>>,
}

impl AllocProblem {
    /// Opens an empty allocation for every available vehicle and places all non-terminal requests
    /// in the pending pool, in instance order.
    pub fn new(instance: Instance) -> Self {
        let mut allocations = SlotMap::with_key();
        let vehicle_keys = instance
            .vehicles
            .iter()
            .map(|v| match v.is_available() {
                true => Some(allocations.insert(Allocation::new(v))),
                false => None,
            })
            .collect_vec();

        let locations = instance
            .requests
            .iter()
            .map(|r| match r.is_terminal() {
                true => {
                    warn!(
                        "[ALLOC] request {} has status {:?} and will not be managed",
                        r.number, r.status
                    );
                    None
                }
                false => Some(Location::Pending),
            })
            .collect_vec();

        let pending = locations
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.map(|_| i))
            .collect_vec();

        let problem = Self {
            instance,
            allocations,
            vehicle_keys,
            pending,
            locations,
        };
        debug_assert!(assertions::problem_is_consistent(&problem));
        problem
    }

    /// Capacity validator: can `request_id` be added to the current allocation of `vehicle_id`?
    /// Unknown requests and vehicles without an open allocation yield `false`.
    pub fn can_allocate(&self, request_id: usize, vehicle_id: usize) -> bool {
        match (
            self.instance.requests.get(request_id),
            self.allocation(vehicle_id),
        ) {
            (Some(request), Some(alloc)) => alloc.can_fit(&request.demand),
            _ => false,
        }
    }

    /// Moves a request from one location to another.
    ///
    /// All preconditions are checked before anything is modified: a rejected transfer leaves
    /// both the source and the destination untouched.
    pub fn transfer(&mut self, transfer: Transfer) -> Result<TransferOutcome, AllocError> {
        let Transfer {
            request_id,
            from,
            to,
            index,
        } = transfer;

        if self.location(request_id) != Some(from) {
            return Err(AllocError::RequestNotFound {
                request: request_id,
            });
        }

        if from == to {
            return match index {
                None => Ok(TransferOutcome::Unchanged),
                Some(index) => {
                    self.reorder(request_id, from, index);
                    Ok(TransferOutcome::Reordered)
                }
            };
        }

        let src_key = match from {
            Location::Pending => None,
            Location::Vehicle(v) => match self.alloc_key(v) {
                Some(key) => Some(key),
                None => {
                    return Err(AllocError::RequestNotFound {
                        request: request_id,
                    });
                }
            },
        };

        let dest_key = match to {
            Location::Pending => None,
            Location::Vehicle(v) => {
                let key = self
                    .alloc_key(v)
                    .ok_or(AllocError::VehicleUnavailable { vehicle: v })?;
                let alloc = &self.allocations[key];
                let demand = self.instance.request(request_id).demand;
                if !alloc.can_fit(&demand) {
                    return Err(AllocError::CapacityExceeded {
                        request: request_id,
                        vehicle: v,
                        excess: capacity::excess(&alloc.total(), &demand, &alloc.capacity),
                    });
                }
                Some(key)
            }
        };

        //all checks passed, commit
        match src_key {
            None => self.pending.retain(|&r| r != request_id),
            Some(key) => {
                self.allocations[key].remove(request_id, &self.instance);
            }
        }
        match dest_key {
            None => {
                let index = index.map_or(self.pending.len(), |i| i.min(self.pending.len()));
                self.pending.insert(index, request_id);
            }
            Some(key) => self.allocations[key].insert(request_id, index, &self.instance),
        }
        self.locations[request_id] = Some(to);

        debug!(
            "[ALLOC] moved request {} from {:?} to {:?}",
            self.instance.request(request_id).number,
            from,
            to
        );
        debug_assert!(assertions::problem_is_consistent(self));

        Ok(match (from, to) {
            (Location::Pending, Location::Vehicle(vehicle)) => {
                TransferOutcome::Allocated { vehicle }
            }
            (Location::Vehicle(vehicle), Location::Pending) => {
                TransferOutcome::Deallocated { vehicle }
            }
            (Location::Vehicle(from), Location::Vehicle(to)) => {
                TransferOutcome::Transferred { from, to }
            }
            (Location::Pending, Location::Pending) => unreachable!("handled above"),
        })
    }

    /// Moves a request from the pending pool to the end of a vehicle's allocation
    pub fn allocate(
        &mut self,
        request_id: usize,
        vehicle_id: usize,
    ) -> Result<TransferOutcome, AllocError> {
        self.transfer(Transfer::new(
            request_id,
            Location::Pending,
            Location::Vehicle(vehicle_id),
        ))
    }

    /// Removes a request from a vehicle's allocation and returns it to the end of the pending pool
    pub fn deallocate(
        &mut self,
        vehicle_id: usize,
        request_id: usize,
    ) -> Result<TransferOutcome, AllocError> {
        self.transfer(Transfer::new(
            request_id,
            Location::Vehicle(vehicle_id),
            Location::Pending,
        ))
    }

    /// Moves a request directly from one vehicle to another
    pub fn move_between(
        &mut self,
        request_id: usize,
        from_vehicle: usize,
        to_vehicle: usize,
    ) -> Result<TransferOutcome, AllocError> {
        self.transfer(Transfer::new(
            request_id,
            Location::Vehicle(from_vehicle),
            Location::Vehicle(to_vehicle),
        ))
    }

    /// Collects what an external route planner needs for a vehicle.
    /// Fails with [`AllocError::EmptyAllocation`] when nothing is allocated to it.
    pub fn route_handoff(&self, vehicle_id: usize) -> Result<RouteHandoff<'_>, AllocError> {
        match self.allocation(vehicle_id) {
            Some(alloc) if !alloc.is_empty() => Ok(RouteHandoff {
                vehicle: self.instance.vehicle(vehicle_id),
                requests: alloc
                    .requests()
                    .iter()
                    .map(|&r| self.instance.request(r))
                    .collect(),
            }),
            _ => Err(AllocError::EmptyAllocation {
                vehicle: vehicle_id,
            }),
        }
    }

    /// Changes the status of a vehicle.
    /// A vehicle that becomes available gets an empty allocation. A vehicle that stops being available
    /// has its allocation closed: its requests return to the end of the pending pool, in allocation order.
    /// Returns the requests that were returned to the pool, unknown vehicles yield [`AllocError::VehicleUnavailable`].
    pub fn set_vehicle_status(
        &mut self,
        vehicle_id: usize,
        status: VehicleStatus,
    ) -> Result<Vec<usize>, AllocError> {
        let Some(vehicle) = self.instance.vehicles.get_mut(vehicle_id) else {
            return Err(AllocError::VehicleUnavailable {
                vehicle: vehicle_id,
            });
        };
        vehicle.status = status;
        let returned = match (status, self.vehicle_keys[vehicle_id]) {
            (VehicleStatus::Available, None) => {
                let alloc = Allocation::new(self.instance.vehicle(vehicle_id));
                self.vehicle_keys[vehicle_id] = Some(self.allocations.insert(alloc));
                vec![]
            }
            (VehicleStatus::Busy | VehicleStatus::Maintenance, Some(key)) => {
                self.vehicle_keys[vehicle_id] = None;
                let returned = self
                    .allocations
                    .remove(key)
                    .map(|mut a| a.drain())
                    .unwrap_or_default();
                for &r in &returned {
                    self.pending.push(r);
                    self.locations[r] = Some(Location::Pending);
                }
                returned
            }
            _ => vec![],
        };
        debug_assert!(assertions::problem_is_consistent(self));
        Ok(returned)
    }

    pub fn save(&self) -> AllocSolution {
        let solution = AllocSolution {
            allocations: self.allocations_in_order().cloned().collect(),
            pending: self.pending.clone(),
            locations: self.locations.clone(),
            vehicle_statuses: self.instance.vehicles.iter().map(|v| v.status).collect(),
            time_stamp: Instant::now(),
        };

        debug_assert!(assertions::problem_matches_solution(self, &solution));

        solution
    }

    pub fn restore(&mut self, solution: &AllocSolution) {
        for (vehicle, status) in self
            .instance
            .vehicles
            .iter_mut()
            .zip(solution.vehicle_statuses.iter())
        {
            vehicle.status = *status;
        }

        //reuse allocations that exist on both sides, drop or create the others
        for vehicle_id in 0..self.vehicle_keys.len() {
            match (self.vehicle_keys[vehicle_id], solution.allocation(vehicle_id)) {
                (Some(key), Some(snapshot)) => self.allocations[key].clone_from(snapshot),
                (Some(key), None) => {
                    self.allocations.remove(key);
                    self.vehicle_keys[vehicle_id] = None;
                }
                (None, Some(snapshot)) => {
                    self.vehicle_keys[vehicle_id] = Some(self.allocations.insert(snapshot.clone()));
                }
                (None, None) => {}
            }
        }

        self.pending.clone_from(&solution.pending);
        self.locations.clone_from(&solution.locations);

        info!(
            "[ALLOC] restored snapshot with {} allocated and {} pending requests",
            solution.n_allocated(),
            solution.pending.len()
        );
        debug_assert!(assertions::problem_matches_solution(self, solution));
    }

    /// Open allocation of a vehicle
    pub fn allocation(&self, vehicle_id: usize) -> Option<&Allocation> {
        self.alloc_key(vehicle_id).map(|key| &self.allocations[key])
    }

    /// All open allocations, in vehicle order
    pub fn allocations_in_order(&self) -> impl Iterator<Item = &Allocation> {
        self.vehicle_keys
            .iter()
            .flatten()
            .map(|&key| &self.allocations[key])
    }

    pub fn views(&self) -> Vec<AllocationView> {
        self.allocations_in_order()
            .map(AllocationView::from)
            .collect()
    }

    /// Ids of the requests in the pending pool, in pool order
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    pub fn location(&self, request_id: usize) -> Option<Location> {
        self.locations.get(request_id).copied().flatten()
    }

    /// Live status of a request
    pub fn status(&self, request_id: usize) -> RequestStatus {
        match self.location(request_id) {
            Some(Location::Pending) => RequestStatus::Pending,
            Some(Location::Vehicle(_)) => RequestStatus::Allocated,
            None => self.instance.request(request_id).status,
        }
    }

    /// Pending requests matching the filter, in pool order
    pub fn filtered_pending(&self, filter: &RequestFilter) -> Vec<&LoadingRequest> {
        self.pending
            .iter()
            .map(|&r| self.instance.request(r))
            .filter(|r| filter.matches(r))
            .collect()
    }

    /// Vehicles that can currently receive requests and match the filter
    pub fn drop_targets(&self, filter: &VehicleFilter) -> Vec<&Vehicle> {
        self.allocations_in_order()
            .map(|a| self.instance.vehicle(a.vehicle_id))
            .filter(|v| filter.matches(v))
            .collect()
    }

    fn alloc_key(&self, vehicle_id: usize) -> Option<AllocKey> {
        self.vehicle_keys.get(vehicle_id).copied().flatten()
    }

    fn reorder(&mut self, request_id: usize, location: Location, index: usize) {
        match location {
            Location::Pending => {
                self.pending.retain(|&r| r != request_id);
                let index = index.min(self.pending.len());
                self.pending.insert(index, request_id);
            }
            Location::Vehicle(v) => {
                if let Some(key) = self.alloc_key(v) {
                    self.allocations[key].reorder(request_id, index);
                }
            }
        }
        debug_assert!(assertions::problem_is_consistent(self));
    }
}

/// Where a request currently resides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// The pool of unassigned requests
    Pending,
    /// The allocation of the vehicle with this id
    Vehicle(usize),
}

/// Encapsulates a single move of a request, as produced by one drag-and-drop gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub request_id: usize,
    pub from: Location,
    pub to: Location,
    /// Position in the destination list, appended at the end if not specified
    pub index: Option<usize>,
}

impl Transfer {
    pub fn new(request_id: usize, from: Location, to: Location) -> Self {
        Self {
            request_id,
            from,
            to,
            index: None,
        }
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Committed effect of a [`Transfer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Moved from the pending pool onto a vehicle
    Allocated { vehicle: usize },
    /// Returned from a vehicle to the pending pool
    Deallocated { vehicle: usize },
    /// Moved directly between two vehicles
    Transferred { from: usize, to: usize },
    /// Repositioned within the same list
    Reordered,
    /// Source and destination are the same, nothing to do
    Unchanged,
}

/// Everything an external route planner receives for one vehicle
#[derive(Debug, Clone)]
pub struct RouteHandoff<'a> {
    pub vehicle: &'a Vehicle,
    /// Allocated requests, in allocation order
    pub requests: Vec<&'a LoadingRequest>,
}
