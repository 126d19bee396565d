#![allow(dead_code)]

use fleetload::entities::{
    AllocProblem, AllocationView, Instance, LoadingRequest, Location, Vehicle,
};
use fleetload::io;
use fleetload::io::ext_repr::{ExtInstance, ExtRequest, ExtVehicle};
use fleetload::session::{AllocListener, Notification};
use itertools::Itertools;

pub const DEMO_INSTANCE: &str = include_str!("../../../assets/fleet_demo.json");

// internal ids of the demo instance
pub const V1: usize = 0;
pub const V2: usize = 1;
pub const V3: usize = 2;
pub const V4: usize = 3;
pub const R1: usize = 0;
pub const R2: usize = 1;
pub const R3: usize = 2;
pub const R4: usize = 3;
pub const R5: usize = 4;

pub fn demo_ext_instance() -> ExtInstance {
    serde_json::from_str(DEMO_INSTANCE).expect("demo instance should parse")
}

pub fn demo_instance() -> Instance {
    io::import(&demo_ext_instance()).expect("demo instance should import")
}

pub fn demo_problem() -> AllocProblem {
    AllocProblem::new(demo_instance())
}

pub fn ext_vehicle(id: &str, weight: f64, volume: f64) -> ExtVehicle {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "plate": format!("PLT-{id}"),
        "category": "truck",
        "weightCapacity": weight,
        "volumeCapacity": volume,
        "status": "available",
    }))
    .expect("vehicle should deserialize")
}

pub fn ext_request(id: &str, weight: f64, volume: f64, priority: &str) -> ExtRequest {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "number": format!("SOL-{id}"),
        "type": "pickup",
        "origin": "Santos - SP",
        "destination": "São Paulo - SP",
        "totalWeight": weight,
        "totalVolume": volume,
        "requestedDate": "2025-06-14",
        "priority": priority,
    }))
    .expect("request should deserialize")
}

/// Every managed request appears exactly once across the pending pool and all allocations
pub fn each_request_in_one_place(problem: &AllocProblem) -> bool {
    let placed = problem
        .pending()
        .iter()
        .copied()
        .chain(
            problem
                .allocations_in_order()
                .flat_map(|a| a.requests().iter().copied()),
        )
        .collect_vec();
    let managed = (0..problem.instance.requests.len())
        .filter(|&r| problem.location(r).is_some())
        .collect_vec();
    placed.len() == managed.len() && placed.iter().sorted().copied().collect_vec() == managed
}

pub fn location_of(problem: &AllocProblem, request_id: usize) -> Location {
    problem.location(request_id).expect("request should be managed")
}

#[derive(Default)]
pub struct RecordingListener {
    pub changes: Vec<Vec<AllocationView>>,
    pub notifications: Vec<Notification>,
    /// Vehicle and request ids of every planned route
    pub routes: Vec<(usize, Vec<usize>)>,
}

impl AllocListener for RecordingListener {
    fn on_allocation_change(&mut self, allocations: &[AllocationView]) {
        self.changes.push(allocations.to_vec());
    }

    fn on_notification(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }

    fn on_route(&mut self, vehicle: &Vehicle, requests: &[&LoadingRequest]) {
        self.routes
            .push((vehicle.id, requests.iter().map(|r| r.id).collect()));
    }
}
