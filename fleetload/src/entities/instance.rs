use crate::entities::{LoadingRequest, Vehicle};
use crate::util::assertions;
use std::collections::HashMap;

/// Static description of a dispatch session: the fleet and the loading requests to be allocated.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Vehicles of the fleet, indexed by their `id`
    pub vehicles: Vec<Vehicle>,
    /// Loading requests, indexed by their `id`
    pub requests: Vec<LoadingRequest>,
    vehicle_index: HashMap<String, usize>,
    request_index: HashMap<String, usize>,
}

impl Instance {
    pub fn new(vehicles: Vec<Vehicle>, requests: Vec<LoadingRequest>) -> Self {
        assert!(assertions::instance_ids_correct(&vehicles, &requests));

        let vehicle_index = vehicles
            .iter()
            .map(|v| (v.ext_id.clone(), v.id))
            .collect();
        let request_index = requests
            .iter()
            .map(|r| (r.ext_id.clone(), r.id))
            .collect();

        Self {
            vehicles,
            requests,
            vehicle_index,
            request_index,
        }
    }

    pub fn vehicle(&self, id: usize) -> &Vehicle {
        &self.vehicles[id]
    }

    pub fn request(&self, id: usize) -> &LoadingRequest {
        &self.requests[id]
    }

    /// Internal id of the vehicle with the given external id
    pub fn vehicle_id(&self, ext_id: &str) -> Option<usize> {
        self.vehicle_index.get(ext_id).copied()
    }

    /// Internal id of the request with the given external id
    pub fn request_id(&self, ext_id: &str) -> Option<usize> {
        self.request_index.get(ext_id).copied()
    }

    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter().filter(|v| v.is_available())
    }
}
