//! Capacity-constrained allocation of loading requests to vehicles.
//!
//! An [`Instance`](entities::Instance) describes the fleet and the requests of one dispatch session.
//! An [`AllocProblem`](entities::AllocProblem) is its mutable counterpart: requests are moved between the
//! pending pool and the vehicles' allocations, and every move is validated against the
//! destination's weight and volume capacity before it is committed.

/// Entities to model the fleet, the loading requests and their allocation
pub mod entities;

/// Domain errors raised by the allocator
pub mod error;

/// Importing fleet instances into and exporting allocations out of this library
pub mod io;

/// Allocation strategies operating on an [`AllocProblem`](entities::AllocProblem)
pub mod opt;

/// Event-driven wrapper around a problem: notifications, change callbacks and route hand-off
pub mod session;

/// Helper functions which do not belong to any specific module
pub mod util;
