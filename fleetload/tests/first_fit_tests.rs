mod common;

#[cfg(test)]
mod tests {
    use crate::common::*;
    use fleetload::entities::{AllocProblem, VehicleStatus};
    use fleetload::io;
    use fleetload::io::ext_repr::ExtInstance;
    use fleetload::opt::FirstFitAllocator;
    use fleetload::util::assertions;

    #[test]
    fn demo_fleet_takes_every_request() {
        let mut problem = demo_problem();
        let report = FirstFitAllocator.solve(&mut problem);

        assert_eq!(
            report.placed,
            vec![(R1, V1), (R5, V2), (R2, V2), (R4, V1), (R3, V2)]
        );
        assert!(report.remaining.is_empty());
        assert_eq!(problem.allocation(V1).unwrap().requests(), &[R1, R4]);
        assert_eq!(problem.allocation(V2).unwrap().requests(), &[R5, R2, R3]);
        assert!(problem.allocation(V3).unwrap().is_empty());
        assert!(problem.allocation(V4).is_none());
        assert!(assertions::problem_is_consistent(&problem));
    }

    #[test]
    fn high_priority_wins_scarce_capacity() {
        let ext_instance = ExtInstance {
            name: "scarce".to_string(),
            vehicles: vec![ext_vehicle("v1", 1000.0, 10.0)],
            requests: vec![
                ext_request("low", 800.0, 2.0, "low"),
                ext_request("medium", 600.0, 2.0, "medium"),
                ext_request("high", 700.0, 2.0, "high"),
            ],
        };
        let mut problem = AllocProblem::new(io::import(&ext_instance).unwrap());
        let report = FirstFitAllocator.solve(&mut problem);

        let high = problem.instance.request_id("high").unwrap();
        let medium = problem.instance.request_id("medium").unwrap();
        let low = problem.instance.request_id("low").unwrap();
        assert_eq!(report.placed, vec![(high, 0)]);
        // requests that fit nowhere keep their pool order
        assert_eq!(report.remaining, vec![low, medium]);
        assert_eq!(problem.pending(), &[low, medium]);
    }

    #[test]
    fn equal_priority_keeps_pool_order() {
        let ext_instance = ExtInstance {
            name: "ties".to_string(),
            vehicles: vec![ext_vehicle("v1", 1000.0, 10.0), ext_vehicle("v2", 1000.0, 10.0)],
            requests: vec![
                ext_request("a", 600.0, 1.0, "medium"),
                ext_request("b", 600.0, 1.0, "medium"),
                ext_request("c", 300.0, 1.0, "medium"),
            ],
        };
        let mut problem = AllocProblem::new(io::import(&ext_instance).unwrap());
        let report = FirstFitAllocator.solve(&mut problem);

        assert_eq!(report.placed, vec![(0, 0), (1, 1), (2, 0)]);
        assert_eq!(problem.allocation(0).unwrap().requests(), &[0, 2]);
    }

    #[test]
    fn existing_allocations_are_respected() {
        let mut problem = demo_problem();
        problem.allocate(R3, V1).unwrap();
        let report = FirstFitAllocator.solve(&mut problem);

        // v1 is full, everything else lands on v2
        assert_eq!(problem.allocation(V1).unwrap().requests(), &[R3]);
        assert_eq!(problem.allocation(V2).unwrap().requests(), &[R1, R5, R2, R4]);
        assert_eq!(report.placed.len(), 4);
    }

    #[test]
    fn unavailable_vehicles_are_skipped() {
        let mut problem = demo_problem();
        for v in [V1, V2, V3] {
            problem.set_vehicle_status(v, VehicleStatus::Busy).unwrap();
        }
        let report = FirstFitAllocator.solve(&mut problem);
        assert!(report.placed.is_empty());
        assert_eq!(report.remaining, vec![R1, R2, R3, R4, R5]);
    }

    #[test]
    fn second_run_has_nothing_left_to_do() {
        let mut problem = demo_problem();
        FirstFitAllocator.solve(&mut problem);
        let before = problem.save();
        let report = FirstFitAllocator.solve(&mut problem);
        assert!(report.placed.is_empty());
        assert!(problem.save().same_state(&before));
    }
}
