//! FleetDesk 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎 + 授权网关）
//! - `api`: 类型化 API 客户端
//! - `cache`: 标签缓存（查询失效）
//! - `mutation`: 表单提交状态机
//! - `session`: 凭证与会话状态
//! - `components`: UI 组件层

mod api;
mod cache;
mod components {
    pub mod account;
    pub mod change_password;
    pub mod dashboard;
    pub mod fleet;
    pub mod forgot_password;
    mod icons;
    pub mod login;
    pub mod my_appointments;
    pub mod news;
    pub mod register;
    pub mod reset_password;
    pub mod schedule;
    pub mod static_pages;
    pub mod support;
}
mod mutation;
mod session;
mod toast;
pub(crate) mod web;

use leptos::prelude::*;

use crate::api::FleetApi;
use crate::cache::provide_query_cache;
use crate::components::account::AccountPage;
use crate::components::change_password::ChangePasswordPage;
use crate::components::dashboard::{DashboardLayout, HomePage};
use crate::components::fleet::FleetPage;
use crate::components::forgot_password::ForgotPasswordPage;
use crate::components::login::LoginPage;
use crate::components::my_appointments::MyAppointmentsPage;
use crate::components::news::NewsPage;
use crate::components::register::RegisterPage;
use crate::components::reset_password::ResetPasswordPage;
use crate::components::schedule::SchedulePage;
use crate::components::static_pages::{FaqPage, InvoicesPage, NotFoundPage};
use crate::components::support::SupportPage;
use crate::session::SessionContext;
use crate::toast::{ToastHost, provide_toast};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 受保护页面统一套上门户外壳
fn shell(page: AnyView) -> AnyView {
    view! { <DashboardLayout>{page}</DashboardLayout> }.into_any()
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::ResetPassword { token } => {
            view! { <ResetPasswordPage token=token /> }.into_any()
        }
        AppRoute::ChangePassword => shell(view! { <ChangePasswordPage /> }.into_any()),
        AppRoute::Home => shell(view! { <HomePage /> }.into_any()),
        AppRoute::Fleet => shell(view! { <FleetPage /> }.into_any()),
        AppRoute::Schedule => shell(view! { <SchedulePage /> }.into_any()),
        AppRoute::MyAppointments => shell(view! { <MyAppointmentsPage /> }.into_any()),
        AppRoute::Support => shell(view! { <SupportPage /> }.into_any()),
        AppRoute::Invoices => shell(view! { <InvoicesPage /> }.into_any()),
        AppRoute::Account => shell(view! { <AccountPage /> }.into_any()),
        AppRoute::Faq => shell(view! { <FaqPage /> }.into_any()),
        AppRoute::News => shell(view! { <NewsPage /> }.into_any()),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 基础设施上下文：API 客户端、标签缓存、Toast
    provide_context(FleetApi::new());
    provide_query_cache();
    provide_toast();

    // 2. 会话上下文（从凭证 cookie 推导初始状态）
    provide_context(SessionContext::new());

    view! {
        // 3. 路由器：每次导航都经过授权网关
        <Router>
            <RouterOutlet matcher=route_matcher />
            <ToastHost />
        </Router>
    }
}
