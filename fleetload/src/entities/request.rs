use crate::entities::Load;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A shipment awaiting assignment to a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingRequest {
    /// Unique identifier of the request within an [`Instance`](crate::entities::Instance), equal to its index
    pub id: usize,
    /// Identifier used outside the library
    pub ext_id: String,
    /// Human-readable number (e.g. `SOL-001`)
    pub number: String,
    pub kind: RequestKind,
    pub origin: String,
    pub destination: String,
    /// Total weight (kg) and total volume (m³) of the request, both non-negative
    pub demand: Load,
    pub requested_date: Date,
    pub priority: Priority,
    /// Status as seeded. The live status of a managed request is tracked by the problem.
    pub status: RequestStatus,
    pub notes: Option<String>,
    pub client: Option<String>,
}

impl LoadingRequest {
    /// Requests in transit or completed are beyond the allocator's reach
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            RequestStatus::InTransit | RequestStatus::Completed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    #[serde(alias = "Direta")]
    Direct,
    #[serde(alias = "Coleta")]
    Pickup,
    #[serde(alias = "Transferência")]
    Transfer,
}

/// Urgency of a request. Ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[serde(alias = "Alta")]
    High,
    #[serde(alias = "Média")]
    Medium,
    #[serde(alias = "Baixa")]
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[serde(alias = "pendente")]
    Pending,
    #[serde(alias = "alocado")]
    Allocated,
    #[serde(alias = "em_transito")]
    InTransit,
    #[serde(alias = "concluido")]
    Completed,
}
