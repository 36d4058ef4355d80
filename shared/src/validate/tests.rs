use super::*;
use crate::ServiceType;

fn valid_registration() -> RegisterRequest {
    RegisterRequest {
        business_name: "Acme Hauling".to_string(),
        state: "TX".to_string(),
        city: "Austin".to_string(),
        number_of_business_year: "8".to_string(),
        number_of_vehicles: "12".to_string(),
        first_name: "Pat".to_string(),
        last_name: "Lee".to_string(),
        title: "Fleet Manager".to_string(),
        phone: "512-555-0100".to_string(),
        email: "pat@acme.example".to_string(),
        password: "hunter22".to_string(),
        ..Default::default()
    }
}

fn valid_appointment() -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        fleet_vehicle: "v-1".to_string(),
        service_type: ServiceType::FlatRepair,
        date: "2026-09-14".to_string(),
        time: "09:30".to_string(),
        address: "1 Depot Rd".to_string(),
        notes: None,
    }
}

#[test]
fn complete_registration_passes() {
    assert!(validate_registration(&valid_registration()).is_ok());
}

#[test]
fn registration_rejects_small_fleets() {
    let mut req = valid_registration();
    req.number_of_vehicles = "4".to_string();
    let errors = validate_registration(&req).unwrap_err();
    assert!(errors.iter().any(|e| e.field == "numberOFvehicles"));

    req.number_of_vehicles = "not a number".to_string();
    assert!(validate_registration(&req).is_err());
}

#[test]
fn registration_rejects_short_passwords_and_bad_emails() {
    let mut req = valid_registration();
    req.password = "abc".to_string();
    req.email = "pat-at-acme".to_string();
    let errors = validate_registration(&req).unwrap_err();
    assert!(errors.iter().any(|e| e.field == "password"));
    assert!(errors.iter().any(|e| e.field == "email"));
}

#[test]
fn login_requires_both_fields() {
    let errors = validate_login(&LoginRequest {
        email: String::new(),
        password: String::new(),
    })
    .unwrap_err();
    assert!(errors.iter().any(|e| e.field == "email"));
    assert!(errors.iter().any(|e| e.field == "password"));
}

#[test]
fn appointment_with_missing_vehicle_is_blocked() {
    // 校验失败即拦截：带该错误的表单不得发起网络请求
    let mut req = valid_appointment();
    req.fleet_vehicle = String::new();
    let errors = validate_appointment(&req).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "fleetVehicle");
}

#[test]
fn appointment_date_and_time_must_parse() {
    let mut req = valid_appointment();
    req.date = "14/09/2026".to_string();
    req.time = "9:3pm".to_string();
    let errors = validate_appointment(&req).unwrap_err();
    assert!(errors.iter().any(|e| e.field == "date"));
    assert!(errors.iter().any(|e| e.field == "time"));

    assert!(validate_appointment(&valid_appointment()).is_ok());
}

#[test]
fn vehicle_requires_every_identifying_field() {
    let errors = validate_vehicle(&CreateVehicleRequest::default()).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    for field in ["year", "make", "model", "vin", "licensePlate", "tireSize"] {
        assert!(fields.contains(&field), "missing error for {field}");
    }
}

#[test]
fn support_ticket_requires_subject_and_message() {
    let errors = validate_support_ticket(&CreateSupportRequest::default()).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(validate_support_ticket(&CreateSupportRequest {
        subject: "Flat on I-35".to_string(),
        message: "Truck 12 needs roadside".to_string(),
    })
    .is_ok());
}

#[test]
fn password_flows_enforce_minimum_length() {
    assert!(validate_password_reset(&ResetPasswordRequest {
        token: "tok".to_string(),
        new_password: "short".to_string(),
    })
    .is_err());
    assert!(validate_password_change(&ChangePasswordRequest {
        old_password: "oldpass".to_string(),
        new_password: "longenough".to_string(),
    })
    .is_ok());
}

#[test]
fn whitespace_only_values_do_not_pass_required_checks() {
    let mut req = valid_registration();
    req.business_name = "   ".to_string();
    assert!(validate_registration(&req).is_err());
}
