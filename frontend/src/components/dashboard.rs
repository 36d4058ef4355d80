//! 门户外壳与首页
//!
//! `DashboardLayout` 是所有受保护页面的外壳：导航栏、账户菜单、登出。
//! `HomePage` 展示车队概况（车辆数、待处理预约、未结工单）。

use fleetdesk_shared::protocol::{
    ListAppointmentsRequest, ListSupportsRequest, ListVehiclesRequest,
};
use fleetdesk_shared::{AppointmentStatus, SupportStatus};
use leptos::prelude::*;

use crate::api::use_api;
use crate::cache::use_tagged_query;
use crate::components::icons::*;
use crate::session::use_session;
use crate::web::router::{Link, use_navigate};

/// 受保护页面的公共外壳
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let api = use_api();

    let email = move || session.state.get().email.unwrap_or_default();

    let on_logout = move |_| {
        session.logout(api.clone(), navigate.clone());
    };

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <div class="navbar bg-base-100 shadow-md px-4">
                <div class="flex-1 gap-2">
                    <Truck class="text-primary h-6 w-6" />
                    <Link to="/" class="btn btn-ghost text-xl">"FleetDesk"</Link>
                    <div class="hidden lg:flex">
                        <ul class="menu menu-horizontal px-1">
                            <li><Link to="/fleet">"Fleet"</Link></li>
                            <li><Link to="/schedule">"Schedule Service"</Link></li>
                            <li><Link to="/may-appointments">"My Appointments"</Link></li>
                            <li><Link to="/support">"Support"</Link></li>
                            <li><Link to="/invoices">"Invoices"</Link></li>
                            <li><Link to="/news">"News"</Link></li>
                            <li><Link to="/faq">"FAQ"</Link></li>
                        </ul>
                    </div>
                </div>
                <div class="flex-none gap-2">
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                            <UserRound class="h-5 w-5" />
                            <span class="hidden md:inline text-sm">{email}</span>
                        </div>
                        <ul
                            tabindex="0"
                            class="menu dropdown-content bg-base-100 rounded-box z-10 mt-3 w-52 p-2 shadow"
                        >
                            <li><Link to="/account">"My Account"</Link></li>
                            <li><Link to="/change-password">"Change Password"</Link></li>
                            <li>
                                <button on:click=on_logout class="text-error">
                                    <LogOut class="h-4 w-4" /> "Sign Out"
                                </button>
                            </li>
                        </ul>
                    </div>
                </div>
            </div>
            <main class="max-w-7xl mx-auto p-4 md:p-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let vehicles = use_tagged_query(|| ListVehiclesRequest {});
    let appointments = use_tagged_query(|| ListAppointmentsRequest {});
    let tickets = use_tagged_query(|| ListSupportsRequest {
        page: None,
        limit: None,
    });

    let vehicle_count = move || {
        vehicles
            .get()
            .and_then(|result| result.ok())
            .map(|payload| payload.data.len().to_string())
            .unwrap_or_else(|| "—".to_string())
    };
    let pending_appointments = move || {
        appointments
            .get()
            .and_then(|result| result.ok())
            .map(|payload| {
                payload
                    .data
                    .iter()
                    .filter(|a| {
                        matches!(
                            a.status,
                            None | Some(AppointmentStatus::Pending)
                                | Some(AppointmentStatus::Confirmed)
                        )
                    })
                    .count()
                    .to_string()
            })
            .unwrap_or_else(|| "—".to_string())
    };
    let open_tickets = move || {
        tickets
            .get()
            .and_then(|result| result.ok())
            .map(|payload| {
                payload
                    .data
                    .iter()
                    .filter(|t| {
                        matches!(
                            t.status,
                            None | Some(SupportStatus::Open) | Some(SupportStatus::InProgress)
                        )
                    })
                    .count()
                    .to_string()
            })
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold">"Fleet Overview"</h1>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Truck class="w-8 h-8" />
                    </div>
                    <div class="stat-title">"Vehicles"</div>
                    <div class="stat-value text-primary">{vehicle_count}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-secondary">
                        <CalendarDays class="w-8 h-8" />
                    </div>
                    <div class="stat-title">"Upcoming Appointments"</div>
                    <div class="stat-value text-secondary">{pending_appointments}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-accent">
                        <LifeBuoy class="w-8 h-8" />
                    </div>
                    <div class="stat-title">"Open Tickets"</div>
                    <div class="stat-value text-accent">{open_tickets}</div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <Link to="/schedule" class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                    <div class="card-body flex-row items-center gap-4">
                        <CalendarDays class="h-8 w-8 text-primary" />
                        <div>
                            <h2 class="card-title text-base">"Schedule Service"</h2>
                            <p class="text-sm text-base-content/70">"Book a tire service appointment"</p>
                        </div>
                    </div>
                </Link>
                <Link to="/fleet" class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                    <div class="card-body flex-row items-center gap-4">
                        <Truck class="h-8 w-8 text-primary" />
                        <div>
                            <h2 class="card-title text-base">"Manage Fleet"</h2>
                            <p class="text-sm text-base-content/70">"Add or update your vehicles"</p>
                        </div>
                    </div>
                </Link>
                <Link to="/support" class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                    <div class="card-body flex-row items-center gap-4">
                        <LifeBuoy class="h-8 w-8 text-primary" />
                        <div>
                            <h2 class="card-title text-base">"Get Support"</h2>
                            <p class="text-sm text-base-content/70">"Open a ticket with our team"</p>
                        </div>
                    </div>
                </Link>
            </div>
        </div>
    }
}
