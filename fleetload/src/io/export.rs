use crate::entities::{AllocSolution, Allocation, Instance};
use crate::io::ext_repr::{ExtAllocation, ExtSolution};
use crate::util::AllocConfig;

/// Exports a solution out of the library
pub fn export(solution: &AllocSolution, instance: &Instance, config: &AllocConfig) -> ExtSolution {
    ExtSolution {
        allocations: solution
            .allocations
            .iter()
            .map(|a| export_allocation(a, instance, config))
            .collect(),
        pending: solution
            .pending
            .iter()
            .map(|&r| instance.request(r).ext_id.clone())
            .collect(),
        weight_usage: solution.weight_usage(),
    }
}

pub fn export_allocation(
    allocation: &Allocation,
    instance: &Instance,
    config: &AllocConfig,
) -> ExtAllocation {
    let vehicle = instance.vehicle(allocation.vehicle_id);
    let utilization = allocation.utilization();
    ExtAllocation {
        vehicle_id: vehicle.ext_id.clone(),
        plate: vehicle.plate.clone(),
        requests: allocation
            .requests()
            .iter()
            .map(|&r| instance.request(r).ext_id.clone())
            .collect(),
        total_weight: allocation.total().weight,
        total_volume: allocation.total().volume,
        weight_utilization: utilization.weight_pct,
        volume_utilization: utilization.volume_pct,
        warnings: allocation.warnings(instance, config),
    }
}
