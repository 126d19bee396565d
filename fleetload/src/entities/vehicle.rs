use crate::entities::Load;
use serde::{Deserialize, Serialize};

/// A vehicle of the fleet, able to carry loading requests up to its [`Load`] capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Unique identifier of the vehicle within an [`Instance`](crate::entities::Instance), equal to its index
    pub id: usize,
    /// Identifier used outside the library
    pub ext_id: String,
    /// License plate
    pub plate: String,
    pub model: String,
    pub category: VehicleCategory,
    /// Maximum weight (kg) and volume (m³) the vehicle can carry. Fixed for the lifetime of a session
    pub capacity: Load,
    pub status: VehicleStatus,
    /// Assigned driver
    pub driver: String,
    /// Current location
    pub location: String,
}

impl Vehicle {
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    Van,
    #[serde(alias = "Caminhão")]
    Truck,
    #[serde(alias = "Carreta")]
    Trailer,
    #[serde(alias = "Bitrem")]
    RoadTrain,
}

impl VehicleCategory {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Van => "Van",
            VehicleCategory::Truck => "Truck",
            VehicleCategory::Trailer => "Trailer",
            VehicleCategory::RoadTrain => "Road train",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[serde(alias = "disponivel")]
    Available,
    #[serde(alias = "ocupado")]
    Busy,
    #[serde(alias = "manutencao")]
    Maintenance,
}
