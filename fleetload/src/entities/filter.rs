use crate::entities::{LoadingRequest, Priority, RequestKind, Vehicle, VehicleCategory};
use serde::{Deserialize, Serialize};

/// Narrows down the pending pool. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestFilter {
    /// Case-insensitive substring of the number, origin, destination or client
    pub search: Option<String>,
    pub kind: Option<RequestKind>,
    pub priority: Option<Priority>,
}

impl RequestFilter {
    pub fn matches(&self, request: &LoadingRequest) -> bool {
        let matches_search = match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                [
                    Some(&request.number),
                    Some(&request.origin),
                    Some(&request.destination),
                    request.client.as_ref(),
                ]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&term))
            }
        };
        matches_search
            && self.kind.is_none_or(|k| k == request.kind)
            && self.priority.is_none_or(|p| p == request.priority)
    }
}

/// Narrows down the vehicles offered as drop targets. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleFilter {
    pub category: Option<VehicleCategory>,
}

impl VehicleFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.category.is_none_or(|c| c == vehicle.category)
    }
}
