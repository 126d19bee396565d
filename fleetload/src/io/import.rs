use crate::entities::{Instance, Load, LoadingRequest, Location, Transfer, Vehicle};
use crate::io::ext_repr::{ExtInstance, ExtMove, ExtRequest, ExtVehicle, PENDING_POOL_ID};
use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;

/// Imports an instance into the library.
/// Vehicles and requests receive dense internal ids in the order they appear.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let duplicate_vehicles = ext_instance.vehicles.iter().map(|v| &v.id).duplicates().collect_vec();
    ensure!(
        duplicate_vehicles.is_empty(),
        "vehicle ids should be unique, duplicates: {duplicate_vehicles:?}"
    );
    let duplicate_requests = ext_instance.requests.iter().map(|r| &r.id).duplicates().collect_vec();
    ensure!(
        duplicate_requests.is_empty(),
        "request ids should be unique, duplicates: {duplicate_requests:?}"
    );

    let vehicles = ext_instance
        .vehicles
        .iter()
        .enumerate()
        .map(|(id, ext_vehicle)| {
            import_vehicle(id, ext_vehicle)
                .with_context(|| format!("invalid vehicle {}", ext_vehicle.id))
        })
        .collect::<Result<Vec<Vehicle>>>()?;

    let requests = ext_instance
        .requests
        .iter()
        .enumerate()
        .map(|(id, ext_request)| {
            import_request(id, ext_request)
                .with_context(|| format!("invalid request {}", ext_request.id))
        })
        .collect::<Result<Vec<LoadingRequest>>>()?;

    Ok(Instance::new(vehicles, requests))
}

pub fn import_vehicle(id: usize, ext_vehicle: &ExtVehicle) -> Result<Vehicle> {
    let capacity = Load::new(ext_vehicle.weight_capacity, ext_vehicle.volume_capacity);
    ensure!(
        capacity.is_finite() && capacity.weight > 0.0 && capacity.volume > 0.0,
        "capacity should be strictly positive, got {capacity}"
    );
    Ok(Vehicle {
        id,
        ext_id: ext_vehicle.id.clone(),
        plate: ext_vehicle.plate.clone(),
        model: ext_vehicle.model.clone(),
        category: ext_vehicle.category,
        capacity,
        status: ext_vehicle.status,
        driver: ext_vehicle.driver.clone(),
        location: ext_vehicle.location.clone(),
    })
}

pub fn import_request(id: usize, ext_request: &ExtRequest) -> Result<LoadingRequest> {
    let demand = Load::new(ext_request.total_weight, ext_request.total_volume);
    ensure!(
        demand.is_finite() && demand.is_non_negative(),
        "weight and volume should be non-negative, got {demand}"
    );
    Ok(LoadingRequest {
        id,
        ext_id: ext_request.id.clone(),
        number: ext_request.number.clone(),
        kind: ext_request.kind,
        origin: ext_request.origin.clone(),
        destination: ext_request.destination.clone(),
        demand,
        requested_date: ext_request.requested_date,
        priority: ext_request.priority,
        status: ext_request.status,
        notes: ext_request.notes.clone(),
        client: ext_request.client.clone(),
    })
}

/// Resolves the external ids of a move against an instance
pub fn import_move(instance: &Instance, ext_move: &ExtMove) -> Result<Transfer> {
    let Some(request_id) = instance.request_id(&ext_move.request) else {
        bail!("unknown request in move: {}", ext_move.request);
    };
    let transfer = Transfer {
        request_id,
        from: import_location(instance, &ext_move.from)?,
        to: import_location(instance, &ext_move.to)?,
        index: ext_move.index,
    };
    Ok(transfer)
}

fn import_location(instance: &Instance, id: &str) -> Result<Location> {
    if id == PENDING_POOL_ID {
        return Ok(Location::Pending);
    }
    match instance.vehicle_id(id) {
        Some(v) => Ok(Location::Vehicle(v)),
        None => bail!("unknown vehicle in move: {id}"),
    }
}
