mod common;

#[cfg(test)]
mod tests {
    use crate::common::*;
    use fleetload::entities::{
        Location, Priority, RequestFilter, RequestKind, RequestStatus, VehicleCategory,
        VehicleFilter, VehicleStatus,
    };
    use fleetload::io;
    use fleetload::io::ext_repr::{ExtInstance, ExtMove, ExtSolution};
    use fleetload::util::AllocConfig;
    use jiff::civil::date;
    use test_case::test_case;

    fn parse_move(json: &str) -> ExtMove {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn demo_instance_imports_in_order() {
        let instance = demo_instance();
        assert_eq!(instance.vehicles.len(), 4);
        assert_eq!(instance.requests.len(), 5);
        assert_eq!(instance.vehicle(V2).plate, "DEF-5678");
        assert_eq!(instance.vehicle_id("v3"), Some(V3));
        assert_eq!(instance.request_id("r5"), Some(R5));
        assert_eq!(instance.request_id("r9"), None);

        let r3 = instance.request(R3);
        assert_eq!(r3.kind, RequestKind::Transfer);
        assert_eq!(r3.priority, Priority::Low);
        assert_eq!(r3.requested_date, date(2025, 6, 16));
        assert_eq!(instance.request(R5).client.as_deref(), Some("Norte Logística"));
        assert_eq!(
            instance.available_vehicles().map(|v| v.id).collect::<Vec<_>>(),
            vec![V1, V2, V3]
        );
    }

    #[test]
    fn localized_labels_are_accepted() {
        let ext_vehicle: fleetload::io::ext_repr::ExtVehicle = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "plate": "MNO-7890",
            "category": "Bitrem",
            "weightCapacity": 57000,
            "volumeCapacity": 180,
            "status": "manutencao",
        }))
        .unwrap();
        assert_eq!(ext_vehicle.category, VehicleCategory::RoadTrain);
        assert_eq!(ext_vehicle.status, VehicleStatus::Maintenance);

        let ext_request: fleetload::io::ext_repr::ExtRequest = serde_json::from_value(serde_json::json!({
            "id": "s1",
            "number": "SOL-100",
            "type": "Coleta",
            "origin": "Curitiba - PR",
            "destination": "Joinville - SC",
            "totalWeight": 900,
            "totalVolume": 2.5,
            "requestedDate": "2025-07-01",
            "priority": "Média",
            "status": "em_transito",
        }))
        .unwrap();
        assert_eq!(ext_request.kind, RequestKind::Pickup);
        assert_eq!(ext_request.priority, Priority::Medium);
        assert_eq!(ext_request.status, RequestStatus::InTransit);
    }

    #[test]
    fn missing_status_defaults_to_pending() {
        let ext_request = ext_request("r1", 10.0, 1.0, "low");
        assert_eq!(ext_request.status, RequestStatus::Pending);
        assert!(ext_request.notes.is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut ext_instance = demo_ext_instance();
        ext_instance.requests.push(ext_request("r2", 100.0, 1.0, "high"));
        let err = io::import(&ext_instance).unwrap_err();
        assert!(err.to_string().contains("r2"));

        let mut ext_instance = demo_ext_instance();
        ext_instance.vehicles.push(ext_vehicle("v1", 1000.0, 5.0));
        assert!(io::import(&ext_instance).is_err());
    }

    #[test_case(0.0, 10.0; "zero weight capacity")]
    #[test_case(1000.0, 0.0; "zero volume capacity")]
    #[test_case(-5.0, 10.0; "negative capacity")]
    #[test_case(f64::NAN, 10.0; "nan capacity")]
    fn invalid_capacity_is_rejected(weight: f64, volume: f64) {
        let mut vehicle = ext_vehicle("v1", 1000.0, 10.0);
        vehicle.weight_capacity = weight;
        vehicle.volume_capacity = volume;
        let ext_instance = ExtInstance {
            name: "invalid".to_string(),
            vehicles: vec![vehicle],
            requests: vec![],
        };
        assert!(io::import(&ext_instance).is_err());
    }

    #[test_case(-1.0, 1.0; "negative weight")]
    #[test_case(1.0, -0.5; "negative volume")]
    #[test_case(f64::INFINITY, 1.0; "infinite weight")]
    fn invalid_demand_is_rejected(weight: f64, volume: f64) {
        let mut request = ext_request("r1", 1.0, 1.0, "high");
        request.total_weight = weight;
        request.total_volume = volume;
        let ext_instance = ExtInstance {
            name: "invalid".to_string(),
            vehicles: vec![ext_vehicle("v1", 1000.0, 10.0)],
            requests: vec![request],
        };
        let err = io::import(&ext_instance).unwrap_err();
        assert!(format!("{err:#}").contains("invalid request r1"));
    }

    #[test]
    fn zero_demand_is_allowed() {
        let ext_instance = ExtInstance {
            name: "empty request".to_string(),
            vehicles: vec![ext_vehicle("v1", 1000.0, 10.0)],
            requests: vec![ext_request("r1", 0.0, 0.0, "high")],
        };
        assert!(io::import(&ext_instance).is_ok());
    }

    #[test]
    fn moves_resolve_external_ids() {
        let instance = demo_instance();

        let transfer = io::import_move(
            &instance,
            &parse_move(r#"{ "request": "r4", "from": "v1", "to": "v2", "index": 0 }"#),
        )
        .unwrap();
        assert_eq!(transfer.request_id, R4);
        assert_eq!(transfer.from, Location::Vehicle(V1));
        assert_eq!(transfer.to, Location::Vehicle(V2));
        assert_eq!(transfer.index, Some(0));

        let transfer = io::import_move(
            &instance,
            &parse_move(r#"{ "request": "r1", "from": "v1", "to": "pending" }"#),
        )
        .unwrap();
        assert_eq!(transfer.to, Location::Pending);
        assert_eq!(transfer.index, None);
    }

    #[test_case(r#"{ "request": "r9", "from": "pending", "to": "v1" }"#; "unknown request")]
    #[test_case(r#"{ "request": "r1", "from": "pending", "to": "v9" }"#; "unknown vehicle")]
    #[test_case(r#"{ "request": "r1", "from": "depot", "to": "v1" }"#; "unknown source")]
    fn unresolvable_moves_are_rejected(json: &str) {
        let instance = demo_instance();
        assert!(io::import_move(&instance, &parse_move(json)).is_err());
    }

    #[test]
    fn demo_moves_parse() {
        let moves: Vec<ExtMove> =
            serde_json::from_str(include_str!("../../assets/moves_demo.json")).unwrap();
        assert_eq!(moves.len(), 6);
        let instance = demo_instance();
        assert!(moves.iter().all(|m| io::import_move(&instance, m).is_ok()));
    }

    #[test]
    fn export_uses_external_ids() {
        let mut problem = demo_problem();
        problem.allocate(R1, V1).unwrap();
        problem.allocate(R4, V1).unwrap();
        problem.allocate(R2, V2).unwrap();
        problem.allocate(R5, V2).unwrap();

        let config = AllocConfig::default();
        let ext_solution = io::export(&problem.save(), &problem.instance, &config);

        assert_eq!(ext_solution.allocations.len(), 3);
        let v1 = &ext_solution.allocations[0];
        assert_eq!(v1.vehicle_id, "v1");
        assert_eq!(v1.plate, "ABC-1234");
        assert_eq!(v1.requests, vec!["r1", "r4"]);
        assert_eq!(v1.total_weight, 3300.0);
        assert_eq!(v1.total_volume, 11.0);
        assert_eq!(v1.weight_utilization, 94);
        assert_eq!(v1.volume_utilization, 73);
        assert_eq!(v1.warnings, vec![fleetload::entities::AllocWarning::WeightNearLimit]);

        let v2 = &ext_solution.allocations[1];
        assert_eq!(v2.requests, vec!["r2", "r5"]);
        assert_eq!(v2.warnings, vec![fleetload::entities::AllocWarning::MixedDates]);
        assert!(ext_solution.allocations[2].requests.is_empty());
        assert_eq!(ext_solution.pending, vec!["r3"]);

        let expected_usage = 6000.0 / (3500.0 + 23000.0 + 40000.0);
        assert!((ext_solution.weight_usage - expected_usage).abs() < 1e-12);

        // camelCase on the wire, warnings left out when there are none
        let json = serde_json::to_value(&ext_solution).unwrap();
        assert_eq!(json["allocations"][0]["weightUtilization"], 94);
        assert_eq!(json["allocations"][0]["warnings"][0], "weight_near_limit");
        assert!(json["allocations"][2].get("warnings").is_none());
        let back: ExtSolution = serde_json::from_value(json).unwrap();
        assert_eq!(back.pending, vec!["r3"]);
    }

    #[test]
    fn pending_filter_matches_search_and_criteria() {
        let problem = demo_problem();
        let numbers = |filter: &RequestFilter| {
            problem
                .filtered_pending(filter)
                .iter()
                .map(|r| r.number.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(numbers(&RequestFilter::default()).len(), 5);

        let by_search = RequestFilter {
            search: Some("SÃO PAULO".to_lowercase()),
            ..Default::default()
        };
        assert_eq!(numbers(&by_search), vec!["SOL-001", "SOL-002", "SOL-004", "SOL-005"]);

        let by_client = RequestFilter {
            search: Some("norte".to_string()),
            ..Default::default()
        };
        assert_eq!(numbers(&by_client), vec!["SOL-005"]);

        let by_number = RequestFilter {
            search: Some("sol-003".to_string()),
            ..Default::default()
        };
        assert_eq!(numbers(&by_number), vec!["SOL-003"]);

        let combined = RequestFilter {
            search: Some("sp".to_string()),
            kind: Some(RequestKind::Pickup),
            priority: Some(Priority::Medium),
        };
        assert_eq!(numbers(&combined), vec!["SOL-002", "SOL-004"]);
    }

    #[test]
    fn filter_only_looks_at_pending_requests() {
        let mut problem = demo_problem();
        problem.allocate(R5, V2).unwrap();
        let filter = RequestFilter {
            search: Some("Norte".to_string()),
            ..Default::default()
        };
        assert!(problem.filtered_pending(&filter).is_empty());
    }

    #[test]
    fn drop_targets_are_available_vehicles_of_category() {
        let mut problem = demo_problem();
        let vans = VehicleFilter {
            category: Some(VehicleCategory::Van),
        };
        let plates = |problem: &fleetload::entities::AllocProblem, filter: &VehicleFilter| {
            problem
                .drop_targets(filter)
                .iter()
                .map(|v| v.plate.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(plates(&problem, &VehicleFilter::default()).len(), 3);
        assert_eq!(plates(&problem, &vans), vec!["ABC-1234"]);

        problem.set_vehicle_status(V4, VehicleStatus::Available).unwrap();
        assert_eq!(plates(&problem, &vans), vec!["ABC-1234", "JKL-3456"]);
    }
}
