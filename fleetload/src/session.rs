use crate::entities::{
    AllocProblem, AllocSolution, AllocationView, LoadingRequest, Location, Transfer,
    TransferOutcome, Vehicle, VehicleStatus,
};
use crate::error::AllocError;
use crate::opt::{AutoAllocReport, FirstFitAllocator};
use anyhow::Result;
use log::{debug, info};
use std::fmt::Display;

/// Receives everything a user interface needs to stay in sync with a [`Session`]
pub trait AllocListener {
    /// Called after every committed change, with all open allocations in fleet order
    fn on_allocation_change(&mut self, allocations: &[AllocationView]);

    /// Called for every user-visible outcome, committed or rejected
    fn on_notification(&mut self, notification: &Notification);

    /// Called after a route was planned for a vehicle, with the requests in the order they were handed off
    fn on_route(&mut self, _vehicle: &Vehicle, _requests: &[&LoadingRequest]) {}
}

/// External collaborator that turns the requests of one vehicle into a route
pub trait RoutePlanner {
    type Route;

    fn plan(&mut self, vehicle: &Vehicle, requests: &[&LoadingRequest]) -> Result<Self::Route>;
}

/// Short user-visible message about the outcome of an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    RequestAllocated { request: String, vehicle: String },
    AllocationRemoved { request: String, vehicle: String },
    AllocationTransferred {
        request: String,
        from: String,
        to: String,
    },
    CapacityExceeded { request: String, vehicle: String },
    RequestNotFound { request: String },
    VehicleUnavailable { vehicle: String },
    EmptyAllocation { vehicle: String },
    RouteGenerated { vehicle: String, n_requests: usize },
    AutoAllocated { placed: usize, candidates: usize },
    Saved,
    Restored,
}

impl Notification {
    /// Whether the notification reports a rejected operation
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notification::CapacityExceeded { .. }
                | Notification::RequestNotFound { .. }
                | Notification::VehicleUnavailable { .. }
                | Notification::EmptyAllocation { .. }
        )
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::RequestAllocated { request, vehicle } => {
                write!(f, "Request allocated: {request} was allocated to {vehicle}")
            }
            Notification::AllocationRemoved { request, vehicle } => {
                write!(f, "Allocation removed: {request} was removed from {vehicle}")
            }
            Notification::AllocationTransferred { request, from, to } => {
                write!(f, "Request transferred: {request} moved from {from} to {to}")
            }
            Notification::CapacityExceeded { request, vehicle } => {
                write!(f, "Capacity exceeded: {vehicle} cannot carry {request}")
            }
            Notification::RequestNotFound { request } => {
                write!(f, "Request not found: {request}")
            }
            Notification::VehicleUnavailable { vehicle } => {
                write!(f, "Vehicle unavailable: {vehicle}")
            }
            Notification::EmptyAllocation { vehicle } => {
                write!(f, "No requests allocated to {vehicle}")
            }
            Notification::RouteGenerated {
                vehicle,
                n_requests,
            } => write!(f, "Route generated for {vehicle} with {n_requests} requests"),
            Notification::AutoAllocated { placed, candidates } => {
                write!(f, "Automatic allocation: {placed} of {candidates} requests allocated")
            }
            Notification::Saved => write!(f, "Allocations saved"),
            Notification::Restored => write!(f, "Changes reverted"),
        }
    }
}

/// One dispatcher's allocation session: a problem, the listener observing it and the last saved state.
pub struct Session<L: AllocListener> {
    pub problem: AllocProblem,
    pub listener: L,
    saved: AllocSolution,
    unsaved_changes: bool,
}

impl<L: AllocListener> Session<L> {
    pub fn new(problem: AllocProblem, listener: L) -> Self {
        let saved = problem.save();
        Self {
            problem,
            listener,
            saved,
            unsaved_changes: false,
        }
    }

    /// Attempts a transfer. Committed transfers are reported to the listener together with the
    /// new allocation state; rejected ones only raise a notification.
    pub fn transfer(&mut self, transfer: Transfer) -> Result<TransferOutcome, AllocError> {
        match self.problem.transfer(transfer) {
            Ok(outcome) => {
                if let Some(n) = self.outcome_notification(transfer.request_id, &outcome) {
                    self.listener.on_notification(&n);
                }
                if outcome != TransferOutcome::Unchanged {
                    self.commit();
                }
                Ok(outcome)
            }
            Err(err) => {
                debug!("[SESSION] transfer rejected: {err}");
                let n = self.error_notification(&err);
                self.listener.on_notification(&n);
                Err(err)
            }
        }
    }

    /// Explicit removal of a request from a vehicle, back to the pending pool
    pub fn remove(
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

    /// Hands the allocated requests of a vehicle over to a route planner
    pub fn generate_route<P: RoutePlanner>(
        &mut self,
        vehicle_id: usize,
        planner: &mut P,
    ) -> Result<P::Route> {
        let handoff = match self.problem.route_handoff(vehicle_id) {
            Ok(handoff) => handoff,
            Err(err) => {
                let n = self.error_notification(&err);
                self.listener.on_notification(&n);
                return Err(err.into());
            }
        };
        let route = planner.plan(handoff.vehicle, &handoff.requests)?;
        self.listener.on_route(handoff.vehicle, &handoff.requests);
        let n = Notification::RouteGenerated {
            vehicle: handoff.vehicle.plate.clone(),
            n_requests: handoff.requests.len(),
        };
        self.listener.on_notification(&n);
        Ok(route)
    }

    pub fn auto_allocate(&mut self) -> AutoAllocReport {
        let candidates = self.problem.pending().len();
        let report = FirstFitAllocator.solve(&mut self.problem);
        self.listener.on_notification(&Notification::AutoAllocated {
            placed: report.placed.len(),
            candidates,
        });
        if !report.placed.is_empty() {
            self.commit();
        }
        report
    }

    /// Changes the availability of a vehicle, see [`AllocProblem::set_vehicle_status`].
    /// The listener only hears about it when an allocation was opened or closed.
    pub fn set_vehicle_status(
        &mut self,
        vehicle_id: usize,
        status: VehicleStatus,
    ) -> Result<Vec<usize>, AllocError> {
        let previous = self.problem.instance.vehicles.get(vehicle_id).map(|v| v.status);
        let was_open = self.problem.allocation(vehicle_id).is_some();

        let returned = match self.problem.set_vehicle_status(vehicle_id, status) {
            Ok(returned) => returned,
            Err(err) => {
                let n = self.error_notification(&err);
                self.listener.on_notification(&n);
                return Err(err);
            }
        };

        //a status-only change (e.g. busy to maintenance) is still part of the saved state
        if previous != Some(status) {
            self.unsaved_changes = true;
        }
        if self.problem.allocation(vehicle_id).is_some() != was_open {
            self.commit();
        }
        Ok(returned)
    }

    /// Marks the current state as the one to return to on [`Session::undo`]
    pub fn save(&mut self) -> &AllocSolution {
        self.saved = self.problem.save();
        self.unsaved_changes = false;
        self.listener.on_notification(&Notification::Saved);
        &self.saved
    }

    /// Reverts all changes since the last save
    pub fn undo(&mut self) {
        self.problem.restore(&self.saved);
        self.unsaved_changes = false;
        info!("[SESSION] reverted to saved state");
        self.listener.on_notification(&Notification::Restored);
        self.listener
            .on_allocation_change(&self.problem.views());
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub fn saved(&self) -> &AllocSolution {
        &self.saved
    }

    fn commit(&mut self) {
        self.unsaved_changes = true;
        self.listener
            .on_allocation_change(&self.problem.views());
    }

    fn request_label(&self, request_id: usize) -> String {
        match self.problem.instance.requests.get(request_id) {
            Some(r) => r.number.clone(),
            None => format!("#{request_id}"),
        }
    }

    fn vehicle_label(&self, vehicle_id: usize) -> String {
        match self.problem.instance.vehicles.get(vehicle_id) {
            Some(v) => v.plate.clone(),
            None => format!("#{vehicle_id}"),
        }
    }

    fn outcome_notification(
        &self,
        request_id: usize,
        outcome: &TransferOutcome,
    ) -> Option<Notification> {
        let request = self.request_label(request_id);
        match *outcome {
            TransferOutcome::Allocated { vehicle } => Some(Notification::RequestAllocated {
                request,
                vehicle: self.vehicle_label(vehicle),
            }),
            TransferOutcome::Deallocated { vehicle } => Some(Notification::AllocationRemoved {
                request,
                vehicle: self.vehicle_label(vehicle),
            }),
            TransferOutcome::Transferred { from, to } => {
                Some(Notification::AllocationTransferred {
                    request,
                    from: self.vehicle_label(from),
                    to: self.vehicle_label(to),
                })
            }
            TransferOutcome::Reordered | TransferOutcome::Unchanged => None,
        }
    }

    fn error_notification(&self, err: &AllocError) -> Notification {
        match *err {
            AllocError::CapacityExceeded {
                request, vehicle, ..
            } => Notification::CapacityExceeded {
                request: self.request_label(request),
                vehicle: self.vehicle_label(vehicle),
            },
            AllocError::EmptyAllocation { vehicle } => Notification::EmptyAllocation {
                vehicle: self.vehicle_label(vehicle),
            },
            AllocError::RequestNotFound { request } => Notification::RequestNotFound {
                request: self.request_label(request),
            },
            AllocError::VehicleUnavailable { vehicle } => Notification::VehicleUnavailable {
                vehicle: self.vehicle_label(vehicle),
            },
        }
    }
}
