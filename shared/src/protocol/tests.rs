use super::*;

#[test]
fn update_paths_substitute_the_id() {
    let req = UpdateVehicleRequest {
        id: "v-42".to_string(),
        make: Some("Ford".to_string()),
        ..Default::default()
    };
    assert_eq!(req.path(), "/fleet-vehicles/v-42");

    let req = UpdateProfileRequest {
        id: "u-7".to_string(),
        ..Default::default()
    };
    assert_eq!(req.path(), "/fleet-users/profile/u-7");
}

#[test]
fn list_news_builds_page_and_limit_query() {
    let req = ListNewsRequest { page: 3, limit: 5 };
    assert_eq!(req.path(), "/fleet-news?page=3&limit=5");
    assert_eq!(ListNewsRequest::default().path(), "/fleet-news?page=1&limit=10");
}

#[test]
fn update_body_excludes_the_path_id_and_unset_fields() {
    let req = UpdateVehicleRequest {
        id: "v-42".to_string(),
        tire_size: Some("225/65R17".to_string()),
        ..Default::default()
    };
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body, serde_json::json!({"tireSize": "225/65R17"}));
}

#[test]
fn register_body_uses_backend_field_spellings() {
    let req = RegisterRequest {
        business_name: "Acme Hauling".to_string(),
        number_of_vehicles: "12".to_string(),
        additional_comments: Some("call after 5pm".to_string()),
        ..Default::default()
    };
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body["businessName"], "Acme Hauling");
    assert_eq!(body["numberOFvehicles"], "12");
    assert_eq!(body["AdditionalComments"], "call after 5pm");
    assert!(body.get("phoneExtension").is_none());
}

#[test]
fn every_vehicle_mutation_invalidates_what_the_vehicle_queries_provide() {
    // 读端点声明的每个标签都必须被变更端点作废，否则 UI 会读到过期缓存
    for provided in ListVehiclesRequest::PROVIDES {
        assert!(CreateVehicleRequest::INVALIDATES.contains(provided));
        assert!(UpdateVehicleRequest::INVALIDATES.contains(provided));
        assert!(DeleteVehicleRequest::INVALIDATES.contains(provided));
    }
    for provided in GetVehicleRequest::PROVIDES {
        assert!(UpdateVehicleRequest::INVALIDATES.contains(provided));
    }
}

#[test]
fn appointment_support_and_profile_mutations_match_their_read_tags() {
    for provided in ListAppointmentsRequest::PROVIDES {
        assert!(CreateAppointmentRequest::INVALIDATES.contains(provided));
        assert!(UpdateAppointmentRequest::INVALIDATES.contains(provided));
        assert!(DeleteAppointmentRequest::INVALIDATES.contains(provided));
    }
    for provided in ListSupportsRequest::PROVIDES {
        assert!(CreateSupportRequest::INVALIDATES.contains(provided));
        assert!(UpdateSupportRequest::INVALIDATES.contains(provided));
        assert!(DeleteSupportRequest::INVALIDATES.contains(provided));
    }
    for provided in MyProfileRequest::PROVIDES {
        assert!(UpdateProfileRequest::INVALIDATES.contains(provided));
    }
}

#[test]
fn queries_never_declare_invalidations() {
    assert!(ListVehiclesRequest::INVALIDATES.is_empty());
    assert!(ListAppointmentsRequest::INVALIDATES.is_empty());
    assert!(ListSupportsRequest::INVALIDATES.is_empty());
    assert!(ListNewsRequest::INVALIDATES.is_empty());
    assert!(MyProfileRequest::INVALIDATES.is_empty());
}

#[test]
fn multipart_creates_flatten_into_form_fields() {
    let req = CreateAppointmentRequest {
        fleet_vehicle: "v-1".to_string(),
        service_type: ServiceType::Rotation,
        date: "2026-09-01".to_string(),
        time: "10:30".to_string(),
        address: "1 Depot Rd".to_string(),
        notes: None,
    };
    let fields = req.form_fields();
    assert!(fields.contains(&("serviceType", "Rotation".to_string())));
    assert!(!fields.iter().any(|(name, _)| *name == "notes"));

    let req = CreateAppointmentRequest {
        notes: Some("rear left losing pressure".to_string()),
        ..req
    };
    assert!(req.form_fields().iter().any(|(name, _)| *name == "notes"));
}

#[test]
fn tag_indices_are_dense_and_stable() {
    let mut seen = [false; ResourceTag::COUNT];
    for tag in ResourceTag::ALL {
        assert!(!seen[tag.index()]);
        seen[tag.index()] = true;
    }
    assert!(seen.iter().all(|s| *s));
}
