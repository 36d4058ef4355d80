//! 注册表单状态管理
//!
//! 将零散的 signal 整合为 `RegisterFormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到请求对象的转换

use fleetdesk_shared::FleetProgram;
use fleetdesk_shared::protocol::RegisterRequest;
use leptos::prelude::*;

/// 注册表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct RegisterFormState {
    // 企业信息
    pub business_name: RwSignal<String>,
    pub state: RwSignal<String>,
    pub city: RwSignal<String>,
    pub years_in_business: RwSignal<String>,
    pub number_of_vehicles: RwSignal<String>,
    pub more_location: RwSignal<bool>,
    pub central_location: RwSignal<bool>,
    pub fleet_program: RwSignal<FleetProgram>,
    pub preferred_location: RwSignal<bool>,
    pub additional_services: RwSignal<Vec<String>>,

    // 联系人信息
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub title: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub phone_extension: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub additional_comments: RwSignal<String>,
}

impl RegisterFormState {
    pub fn new() -> Self {
        Self {
            business_name: RwSignal::new(String::new()),
            state: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            years_in_business: RwSignal::new(String::new()),
            number_of_vehicles: RwSignal::new(String::new()),
            more_location: RwSignal::new(false),
            central_location: RwSignal::new(false),
            fleet_program: RwSignal::new(FleetProgram::default()),
            preferred_location: RwSignal::new(false),
            additional_services: RwSignal::new(Vec::new()),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            phone_extension: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            additional_comments: RwSignal::new(String::new()),
        }
    }

    /// 勾选/取消一项附加服务
    pub fn toggle_service(&self, service: &str) {
        self.additional_services.update(|list| {
            if let Some(pos) = list.iter().position(|s| s == service) {
                list.remove(pos);
            } else {
                list.push(service.to_string());
            }
        });
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.additional_services
            .with(|list| list.iter().any(|s| s == service))
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.business_name.set(String::new());
        self.state.set(String::new());
        self.city.set(String::new());
        self.years_in_business.set(String::new());
        self.number_of_vehicles.set(String::new());
        self.more_location.set(false);
        self.central_location.set(false);
        self.fleet_program.set(FleetProgram::default());
        self.preferred_location.set(false);
        self.additional_services.set(Vec::new());
        self.first_name.set(String::new());
        self.last_name.set(String::new());
        self.title.set(String::new());
        self.phone.set(String::new());
        self.phone_extension.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.additional_comments.set(String::new());
    }

    /// 将表单状态转换为 API 请求对象
    pub fn to_request(&self) -> RegisterRequest {
        let extension = self.phone_extension.get();
        let comments = self.additional_comments.get();

        RegisterRequest {
            business_name: self.business_name.get(),
            state: self.state.get(),
            city: self.city.get(),
            number_of_business_year: self.years_in_business.get(),
            number_of_vehicles: self.number_of_vehicles.get(),
            more_location: self.more_location.get(),
            central_location: self.central_location.get(),
            fleet_program: self.fleet_program.get(),
            preferred_location: self.preferred_location.get(),
            additional_services: self.additional_services.get(),
            first_name: self.first_name.get(),
            last_name: self.last_name.get(),
            title: self.title.get(),
            phone: self.phone.get(),
            phone_extension: if extension.trim().is_empty() {
                None
            } else {
                Some(extension)
            },
            email: self.email.get(),
            password: self.password.get(),
            additional_comments: if comments.trim().is_empty() {
                None
            } else {
                Some(comments)
            },
        }
    }
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self::new()
    }
}
