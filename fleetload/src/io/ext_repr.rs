use crate::entities::{
    AllocWarning, Priority, RequestKind, RequestStatus, VehicleCategory, VehicleStatus,
};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Identifier of the pending pool in [`ExtMove`]s
pub const PENDING_POOL_ID: &str = "pending";

/// A dispatch session: the fleet and the loading requests to allocate
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub vehicles: Vec<ExtVehicle>,
    pub requests: Vec<ExtRequest>,
}

/// External representation of a [`Vehicle`](crate::entities::Vehicle)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtVehicle {
    /// Unique identifier of the vehicle
    pub id: String,
    pub plate: String,
    #[serde(default)]
    pub model: String,
    pub category: VehicleCategory,
    /// Maximum weight in kg
    pub weight_capacity: f64,
    /// Maximum volume in m³
    pub volume_capacity: f64,
    pub status: VehicleStatus,
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub location: String,
}

/// External representation of a [`LoadingRequest`](crate::entities::LoadingRequest)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtRequest {
    /// Unique identifier of the request
    pub id: String,
    /// Human-readable number
    pub number: String,
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub origin: String,
    pub destination: String,
    /// Total weight in kg
    pub total_weight: f64,
    /// Total volume in m³
    pub total_volume: f64,
    /// ISO 8601 date (`YYYY-MM-DD`)
    pub requested_date: Date,
    pub priority: Priority,
    #[serde(default = "default_status")]
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

fn default_status() -> RequestStatus {
    RequestStatus::Pending
}

/// One move of a request, e.g. the result of a drag-and-drop gesture.
/// `from` and `to` are either [`PENDING_POOL_ID`] or the id of a vehicle.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtMove {
    pub request: String,
    pub from: String,
    pub to: String,
    /// Position in the destination list, end of the list if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// State of all allocations of a session
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtSolution {
    /// Allocations of the available vehicles, in fleet order
    pub allocations: Vec<ExtAllocation>,
    /// Ids of the requests left in the pending pool, in pool order
    pub pending: Vec<String>,
    /// Sum of the allocated weight divided by the sum of the weight capacity of all available vehicles
    pub weight_usage: f64,
}

/// External representation of an [`Allocation`](crate::entities::Allocation)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtAllocation {
    pub vehicle_id: String,
    pub plate: String,
    /// Ids of the allocated requests, in allocation order
    pub requests: Vec<String>,
    pub total_weight: f64,
    pub total_volume: f64,
    /// Whole percent of the weight capacity in use
    pub weight_utilization: u32,
    /// Whole percent of the volume capacity in use
    pub volume_utilization: u32,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<AllocWarning>,
}
