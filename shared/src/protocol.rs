//! Wire protocol: endpoint descriptions and resource tags.
//!
//! Every endpoint is a request type implementing [`ApiRequest`], which pins
//! down the HTTP method, the concrete path (with parameter substitution),
//! the payload encoding, the response type, and the cache tags the call
//! provides or invalidates. The dispatcher in the frontend is generic over
//! this trait; nothing else in the portal spells out a URL.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    Appointment, FleetProgram, NewsItem, ServiceType, SupportTicket, UserProfile, Vehicle,
};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// 是否为会改变资源状态的方法
    pub fn is_mutation(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// How the request body goes over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    Json,
    /// multipart/form-data, used by the creates that carry file attachments.
    Multipart,
}

/// A label grouping cached query results with the mutations that must
/// invalidate them. Invalidation is tag-exact and total: bumping a tag
/// refetches ALL queries bearing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceTag {
    FleetVehicles,
    FleetAppointments,
    FleetSupport,
    FleetUser,
}

impl ResourceTag {
    pub const COUNT: usize = 4;

    pub const ALL: [ResourceTag; ResourceTag::COUNT] = [
        ResourceTag::FleetVehicles,
        ResourceTag::FleetAppointments,
        ResourceTag::FleetSupport,
        ResourceTag::FleetUser,
    ];

    /// Stable slot for per-tag version bookkeeping.
    pub fn index(&self) -> usize {
        match self {
            ResourceTag::FleetVehicles => 0,
            ResourceTag::FleetAppointments => 1,
            ResourceTag::FleetSupport => 2,
            ResourceTag::FleetUser => 3,
        }
    }
}

/// A trait that defines the request-response relationship and metadata for
/// an API endpoint.
pub trait ApiRequest: Serialize {
    /// The `data` payload type of the response envelope. Mutations use
    /// [`serde_json::Value`]: their payload is never consumed, dependent
    /// views refetch through tag invalidation instead.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The body encoding (JSON unless attachments force multipart).
    const ENCODING: PayloadEncoding = PayloadEncoding::Json;
    /// Tags a query's cached result carries.
    const PROVIDES: &'static [ResourceTag] = &[];
    /// Tags a successful mutation must bump.
    const INVALIDATES: &'static [ResourceTag] = &[];
    /// The URL path (or suffix), with path/query parameters substituted.
    fn path(&self) -> String;
}

// =========================================================
// Auth / fleet-users
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `data` of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl ApiRequest for LoginRequest {
    type Response = LoginData;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/fleet-auth/login".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {}

impl ApiRequest for LogoutRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/fleet-auth/logout".to_string()
    }
}

/// Registration payload; field spelling follows the backend schema,
/// including `numberOFvehicles`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub business_name: String,
    pub state: String,
    pub city: String,
    pub number_of_business_year: String,
    #[serde(rename = "numberOFvehicles")]
    pub number_of_vehicles: String,
    pub more_location: bool,
    pub central_location: bool,
    pub fleet_program: FleetProgram,
    pub preferred_location: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub additional_services: Vec<String>,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone_extension: Option<String>,
    pub email: String,
    pub password: String,
    #[serde(
        rename = "AdditionalComments",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub additional_comments: Option<String>,
}

impl ApiRequest for RegisterRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/fleet-users/register".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

impl ApiRequest for ForgotPasswordRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/fleet-auth/forgot-password".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(skip)]
    pub token: String,
    pub new_password: String,
}

impl ApiRequest for ResetPasswordRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/fleet-auth/reset-password?token={}", self.token)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

impl ApiRequest for ChangePasswordRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/fleet-auth/change-password".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyProfileRequest {}

impl ApiRequest for MyProfileRequest {
    type Response = UserProfile;
    const METHOD: HttpMethod = HttpMethod::Get;
    const PROVIDES: &'static [ResourceTag] = &[ResourceTag::FleetUser];

    fn path(&self) -> String {
        "/fleet-users/profile/me".to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<String>,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Patch;
    const INVALIDATES: &'static [ResourceTag] = &[ResourceTag::FleetUser];

    fn path(&self) -> String {
        format!("/fleet-users/profile/{}", self.id)
    }
}

// =========================================================
// fleet-vehicles
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListVehiclesRequest {}

impl ApiRequest for ListVehiclesRequest {
    type Response = Vec<Vehicle>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const PROVIDES: &'static [ResourceTag] = &[ResourceTag::FleetVehicles];

    fn path(&self) -> String {
        "/fleet-vehicles".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetVehicleRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for GetVehicleRequest {
    type Response = Vehicle;
    const METHOD: HttpMethod = HttpMethod::Get;
    const PROVIDES: &'static [ResourceTag] = &[ResourceTag::FleetVehicles];

    fn path(&self) -> String {
        format!("/fleet-vehicles/{}", self.id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub year: String,
    pub make: String,
    pub model: String,
    pub vin: String,
    pub license_plate: String,
    pub tire_size: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

impl ApiRequest for CreateVehicleRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;
    const INVALIDATES: &'static [ResourceTag] = &[ResourceTag::FleetVehicles];

    fn path(&self) -> String {
        "/fleet-vehicles".to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub license_plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tire_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

impl ApiRequest for UpdateVehicleRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Patch;
    const INVALIDATES: &'static [ResourceTag] = &[ResourceTag::FleetVehicles];

    fn path(&self) -> String {
        format!("/fleet-vehicles/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteVehicleRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteVehicleRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const INVALIDATES: &'static [ResourceTag] = &[ResourceTag::FleetVehicles];

    fn path(&self) -> String {
        format!("/fleet-vehicles/{}", self.id)
    }
}

// =========================================================
// fleet-appointments
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAppointmentsRequest {}

impl ApiRequest for ListAppointmentsRequest {
    type Response = Vec<Appointment>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const PROVIDES: &'static [ResourceTag] = &[ResourceTag::FleetAppointments];

    fn path(&self) -> String {
        "/fleet-appointments".to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAppointmentRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for GetAppointmentRequest {
    type Response = Appointment;
    const METHOD: HttpMethod = HttpMethod::Get;
    const PROVIDES: &'static [ResourceTag] = &[ResourceTag::FleetAppointments];

    fn path(&self) -> String {
        format!("/fleet-appointments/{}", self.id)
    }
}

/// Appointment creation goes over multipart so inspection photos can ride
/// along; the scalar fields become form parts via [`Self::form_fields`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub fleet_vehicle: String,
    pub service_type: ServiceType,
    pub date: String,
    pub time: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl CreateAppointmentRequest {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("fleetVehicle", self.fleet_vehicle.clone()),
            ("serviceType", self.service_type.label().to_string()),
            ("date", self.date.clone()),
            ("time", self.time.clone()),
            ("address", self.address.clone()),
        ];
        if let Some(notes) = &self.notes {
            fields.push(("notes", notes.clone()));
        }
        fields
    }
}

impl ApiRequest for CreateAppointmentRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: PayloadEncoding = PayloadEncoding::Multipart;
    const INVALIDATES: &'static [ResourceTag] = &[ResourceTag::FleetAppointments];

    fn path(&self) -> String {
        "/fleet-appointments/create".to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub service_type: Option<ServiceType>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl ApiRequest for UpdateAppointmentRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Patch;
    const INVALIDATES: &'static [ResourceTag] = &[ResourceTag::FleetAppointments];

    fn path(&self) -> String {
        format!("/fleet-appointments/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAppointmentRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteAppointmentRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const INVALIDATES: &'static [ResourceTag] = &[ResourceTag::FleetAppointments];

    fn path(&self) -> String {
        format!("/fleet-appointments/{}", self.id)
    }
}

// =========================================================
// fleet-supports
// =========================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSupportsRequest {
    #[serde(skip)]
    pub page: Option<u64>,
    #[serde(skip)]
    pub limit: Option<u64>,
}

impl ApiRequest for ListSupportsRequest {
    type Response = Vec<SupportTicket>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const PROVIDES: &'static [ResourceTag] = &[ResourceTag::FleetSupport];

    fn path(&self) -> String {
        match (self.page, self.limit) {
            (Some(page), Some(limit)) => format!("/fleet-supports?page={page}&limit={limit}"),
            (Some(page), None) => format!("/fleet-supports?page={page}"),
            (None, Some(limit)) => format!("/fleet-supports?limit={limit}"),
            (None, None) => "/fleet-supports".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSupportRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for GetSupportRequest {
    type Response = SupportTicket;
    const METHOD: HttpMethod = HttpMethod::Get;
    const PROVIDES: &'static [ResourceTag] = &[ResourceTag::FleetSupport];

    fn path(&self) -> String {
        format!("/fleet-supports/{}", self.id)
    }
}

/// Support tickets also carry attachments, hence multipart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSupportRequest {
    pub subject: String,
    pub message: String,
}

impl CreateSupportRequest {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("subject", self.subject.clone()),
            ("message", self.message.clone()),
        ]
    }
}

impl ApiRequest for CreateSupportRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: PayloadEncoding = PayloadEncoding::Multipart;
    const INVALIDATES: &'static [ResourceTag] = &[ResourceTag::FleetSupport];

    fn path(&self) -> String {
        "/fleet-supports/create".to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSupportRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl ApiRequest for UpdateSupportRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Patch;
    const INVALIDATES: &'static [ResourceTag] = &[ResourceTag::FleetSupport];

    fn path(&self) -> String {
        format!("/fleet-supports/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSupportRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteSupportRequest {
    type Response = serde_json::Value;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const INVALIDATES: &'static [ResourceTag] = &[ResourceTag::FleetSupport];

    fn path(&self) -> String {
        format!("/fleet-supports/{}", self.id)
    }
}

// =========================================================
// fleet-news
// =========================================================

/// News feed is read-only; it deliberately carries no tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNewsRequest {
    #[serde(skip)]
    pub page: u64,
    #[serde(skip)]
    pub limit: u64,
}

impl Default for ListNewsRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl ApiRequest for ListNewsRequest {
    type Response = Vec<NewsItem>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/fleet-news?page={}&limit={}", self.page, self.limit)
    }
}

#[cfg(test)]
mod tests;
