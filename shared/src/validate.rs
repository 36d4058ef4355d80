//! Local form validation.
//!
//! Field-level checks that block a submission before any network dispatch.
//! Rules mirror the backend's registration schema so a form the backend
//! would reject never leaves the browser. Errors are `{field, message}`
//! pairs the forms render inline.

use chrono::{NaiveDate, NaiveTime};

use crate::protocol::{
    ChangePasswordRequest, CreateAppointmentRequest, CreateSupportRequest, CreateVehicleRequest,
    LoginRequest, RegisterRequest, ResetPasswordRequest,
};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_FLEET_SIZE: u32 = 5;

/// One inline error, keyed by the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type ValidationResult = Result<(), Vec<FieldError>>;

fn finish(errors: Vec<FieldError>) -> ValidationResult {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required")));
    }
}

/// 轻量邮箱格式检查（与后端一致的宽松规则）
fn check_email(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "Email is required"));
        return;
    }
    let valid = trimmed
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        errors.push(FieldError::new(
            field,
            "Please enter a valid email address",
        ));
    }
}

fn check_password(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            field,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
}

pub fn validate_login(req: &LoginRequest) -> ValidationResult {
    let mut errors = Vec::new();
    check_email(&mut errors, "email", &req.email);
    require(&mut errors, "password", &req.password, "Password");
    finish(errors)
}

pub fn validate_registration(req: &RegisterRequest) -> ValidationResult {
    let mut errors = Vec::new();
    require(
        &mut errors,
        "businessName",
        &req.business_name,
        "Business name",
    );
    require(&mut errors, "state", &req.state, "State");
    require(&mut errors, "city", &req.city, "City");
    require(
        &mut errors,
        "numberOfBusinessYear",
        &req.number_of_business_year,
        "Number of business years",
    );
    match req.number_of_vehicles.trim().parse::<u32>() {
        Ok(count) if count >= MIN_FLEET_SIZE => {}
        _ => errors.push(FieldError::new(
            "numberOFvehicles",
            format!("Number of vehicles must be at least {MIN_FLEET_SIZE}"),
        )),
    }
    require(&mut errors, "firstName", &req.first_name, "First name");
    require(&mut errors, "lastName", &req.last_name, "Last name");
    require(&mut errors, "title", &req.title, "Title");
    require(&mut errors, "phone", &req.phone, "Phone number");
    check_email(&mut errors, "email", &req.email);
    check_password(&mut errors, "password", &req.password);
    finish(errors)
}

pub fn validate_vehicle(req: &CreateVehicleRequest) -> ValidationResult {
    let mut errors = Vec::new();
    require(&mut errors, "year", &req.year, "Year");
    require(&mut errors, "make", &req.make, "Make");
    require(&mut errors, "model", &req.model, "Model");
    require(&mut errors, "vin", &req.vin, "VIN");
    require(
        &mut errors,
        "licensePlate",
        &req.license_plate,
        "License plate",
    );
    require(&mut errors, "tireSize", &req.tire_size, "Tire size");
    finish(errors)
}

pub fn validate_appointment(req: &CreateAppointmentRequest) -> ValidationResult {
    let mut errors = Vec::new();
    require(&mut errors, "fleetVehicle", &req.fleet_vehicle, "Vehicle");
    require(&mut errors, "address", &req.address, "Address");

    if req.date.trim().is_empty() {
        errors.push(FieldError::new("date", "Date is required"));
    } else if NaiveDate::parse_from_str(req.date.trim(), "%Y-%m-%d").is_err() {
        errors.push(FieldError::new("date", "Date must be YYYY-MM-DD"));
    }

    if req.time.trim().is_empty() {
        errors.push(FieldError::new("time", "Time is required"));
    } else if NaiveTime::parse_from_str(req.time.trim(), "%H:%M").is_err() {
        errors.push(FieldError::new("time", "Time must be HH:MM"));
    }

    finish(errors)
}

pub fn validate_support_ticket(req: &CreateSupportRequest) -> ValidationResult {
    let mut errors = Vec::new();
    require(&mut errors, "subject", &req.subject, "Subject");
    require(&mut errors, "message", &req.message, "Message");
    finish(errors)
}

pub fn validate_password_reset(req: &ResetPasswordRequest) -> ValidationResult {
    let mut errors = Vec::new();
    if req.token.trim().is_empty() {
        errors.push(FieldError::new("token", "Reset link is invalid or expired"));
    }
    check_password(&mut errors, "newPassword", &req.new_password);
    finish(errors)
}

pub fn validate_password_change(req: &ChangePasswordRequest) -> ValidationResult {
    let mut errors = Vec::new();
    require(
        &mut errors,
        "oldPassword",
        &req.old_password,
        "Current password",
    );
    check_password(&mut errors, "newPassword", &req.new_password);
    finish(errors)
}

#[cfg(test)]
mod tests;
