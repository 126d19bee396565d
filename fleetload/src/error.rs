use crate::entities::Load;
use thiserror::Error;

/// Rejected allocator operations. None of them leave the problem in a modified state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocError {
    #[error("request {request} does not fit on vehicle {vehicle} (exceeds capacity by {excess})")]
    CapacityExceeded {
        request: usize,
        vehicle: usize,
        excess: Load,
    },

    #[error("no requests allocated to vehicle {vehicle}")]
    EmptyAllocation { vehicle: usize },

    #[error("request {request} not found at the given source")]
    RequestNotFound { request: usize },

    #[error("vehicle {vehicle} is not available for allocation")]
    VehicleUnavailable { vehicle: usize },
}
