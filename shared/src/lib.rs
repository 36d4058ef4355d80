use serde::{Deserialize, Serialize};

pub mod cache;
pub mod credential;
pub mod envelope;
pub mod failure;
pub mod gate;
pub mod mutation;
pub mod protocol;
pub mod validate;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// Cookie carrying the session credential. The backend variant that also
/// sets `refreshToken` is tolerated on logout, but the gate only reads this.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// The single privileged role the portal serves.
pub const FLEET_ROLE: &str = "fleet_user";

/// Redirect target for every denied navigation.
pub const LOGIN_PATH: &str = "/login";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// A registered fleet vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id")]
    pub id: String,
    pub year: String,
    pub make: String,
    pub model: String,
    pub vin: String,
    pub license_plate: String,
    pub tire_size: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Tire-service type offered on the schedule form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Tire Replacement")]
    TireReplacement,
    #[serde(rename = "Flat Repair")]
    FlatRepair,
    #[serde(rename = "Balance")]
    Balance,
    #[serde(rename = "Rotation")]
    Rotation,
    #[serde(rename = "Other")]
    Other,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::TireReplacement,
        ServiceType::FlatRepair,
        ServiceType::Balance,
        ServiceType::Rotation,
        ServiceType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::TireReplacement => "Tire Replacement",
            ServiceType::FlatRepair => "Flat Repair",
            ServiceType::Balance => "Balance",
            ServiceType::Rotation => "Rotation",
            ServiceType::Other => "Other",
        }
    }
}

impl Default for ServiceType {
    fn default() -> Self {
        ServiceType::TireReplacement
    }
}

/// Appointment state, owned by the backend approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Confirmed")]
    Confirmed,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// A tire-service appointment as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    /// Vehicle id this appointment was booked for.
    pub fleet_vehicle: String,
    pub service_type: ServiceType,
    pub date: String,
    pub time: String,
    pub address: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub estimated_duration: Option<u32>,
    #[serde(default)]
    pub cost_estimate: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Support ticket state, driven by the backend ticket workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportStatus {
    #[serde(rename = "Open")]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Resolved")]
    Resolved,
    #[serde(rename = "Closed")]
    Closed,
}

impl SupportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SupportStatus::Open => "Open",
            SupportStatus::InProgress => "In Progress",
            SupportStatus::Resolved => "Resolved",
            SupportStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: Option<SupportStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One entry of the news & updates feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Fleet-account profile as served by `/fleet-users/profile/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub business_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Fleet-program channel the account signed up through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FleetProgram {
    #[serde(rename = "Fleet Sales Specialist")]
    FleetSalesSpecialist,
    #[serde(rename = "Store")]
    Store,
    #[serde(rename = "Website")]
    Website,
    #[serde(rename = "Other")]
    Other,
}

impl FleetProgram {
    pub const ALL: [FleetProgram; 4] = [
        FleetProgram::FleetSalesSpecialist,
        FleetProgram::Store,
        FleetProgram::Website,
        FleetProgram::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FleetProgram::FleetSalesSpecialist => "Fleet Sales Specialist",
            FleetProgram::Store => "Store",
            FleetProgram::Website => "Website",
            FleetProgram::Other => "Other",
        }
    }
}

impl Default for FleetProgram {
    fn default() -> Self {
        FleetProgram::Website
    }
}

/// Optional add-on services offered during registration.
pub const ADDITIONAL_SERVICES: [&str; 5] = [
    "Coast Fuel Savings",
    "Discount Tire Telematics by Motorq",
    "Revvo Smart Tire",
    "Roadside Assistance by NSD",
    "Spiffy Mobile Oil Change Service",
];
