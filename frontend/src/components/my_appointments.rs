//! 我的预约页面
//!
//! 预约列表（状态徽章）+ 取消。车辆名称由 FleetVehicles 查询联查得出。

use std::collections::HashMap;

use fleetdesk_shared::AppointmentStatus;
use fleetdesk_shared::protocol::{
    DeleteAppointmentRequest, ListAppointmentsRequest, ListVehiclesRequest,
};
use leptos::prelude::*;

use crate::cache::use_tagged_query;
use crate::components::icons::{CalendarDays, Trash2};
use crate::mutation::MutationController;
use crate::toast::use_toast;
use crate::web::router::Link;

fn status_badge_class(status: Option<AppointmentStatus>) -> &'static str {
    match status {
        None | Some(AppointmentStatus::Pending) => "badge badge-warning",
        Some(AppointmentStatus::Confirmed) => "badge badge-info",
        Some(AppointmentStatus::Completed) => "badge badge-success",
        Some(AppointmentStatus::Cancelled) => "badge badge-ghost",
    }
}

#[component]
pub fn MyAppointmentsPage() -> impl IntoView {
    let toast = use_toast();
    let appointments = use_tagged_query(|| ListAppointmentsRequest {});
    let vehicles = use_tagged_query(|| ListVehiclesRequest {});
    let cancel_controller = MutationController::new();

    // id -> "2021 Ford Transit" 的联查表
    let vehicle_names = Memo::new(move |_| {
        vehicles
            .get()
            .and_then(|result| result.ok())
            .map(|payload| {
                payload
                    .data
                    .into_iter()
                    .map(|v| (v.id.clone(), format!("{} {} {}", v.year, v.make, v.model)))
                    .collect::<HashMap<_, _>>()
            })
            .unwrap_or_default()
    });

    let on_cancel = {
        let cancel_controller = cancel_controller.clone();
        move |id: String| {
            cancel_controller.submit(DeleteAppointmentRequest { id }, move || {
                toast.success("Appointment cancelled");
            });
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"My Appointments"</h1>
                <Link to="/schedule" class="btn btn-primary btn-sm">"Schedule Service"</Link>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0 md:p-4 overflow-x-auto">
                    {move || match appointments.get() {
                        None => view! {
                            <div class="flex justify-center py-12">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }.into_any(),
                        Some(Err(failure)) => view! {
                            <div role="alert" class="alert alert-error m-4">
                                <span>{failure.user_message()}</span>
                            </div>
                        }.into_any(),
                        Some(Ok(payload)) if payload.data.is_empty() => view! {
                            <div class="flex flex-col items-center gap-3 py-12 text-base-content/60">
                                <CalendarDays class="h-12 w-12" />
                                <p>"No appointments yet."</p>
                            </div>
                        }.into_any(),
                        Some(Ok(payload)) => {
                            let on_cancel = on_cancel.clone();
                            view! {
                                <table class="table table-zebra">
                                    <thead>
                                        <tr>
                                            <th>"Vehicle"</th>
                                            <th>"Service"</th>
                                            <th>"Date"</th>
                                            <th>"Time"</th>
                                            <th>"Status"</th>
                                            <th class="text-right">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {payload
                                            .data
                                            .into_iter()
                                            .map(|appt| {
                                                let vehicle = vehicle_names.with(|names| {
                                                    names
                                                        .get(&appt.fleet_vehicle)
                                                        .cloned()
                                                        .unwrap_or_else(|| appt.fleet_vehicle.clone())
                                                });
                                                let cancel_id = appt.id.clone();
                                                let on_cancel = on_cancel.clone();
                                                let status = appt.status;
                                                let cancellable = !matches!(
                                                    status,
                                                    Some(AppointmentStatus::Completed)
                                                        | Some(AppointmentStatus::Cancelled)
                                                );
                                                view! {
                                                    <tr>
                                                        <td class="font-medium">{vehicle}</td>
                                                        <td>{appt.service_type.label()}</td>
                                                        <td>{appt.date.clone()}</td>
                                                        <td>{appt.time.clone()}</td>
                                                        <td>
                                                            <span class=status_badge_class(status)>
                                                                {status
                                                                    .map(|s| s.label())
                                                                    .unwrap_or("Pending")}
                                                            </span>
                                                        </td>
                                                        <td class="text-right">
                                                            {cancellable.then(|| view! {
                                                                <button
                                                                    class="btn btn-ghost btn-sm text-error"
                                                                    on:click=move |_| on_cancel(cancel_id.clone())
                                                                >
                                                                    <Trash2 class="h-4 w-4" />
                                                                </button>
                                                            })}
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }.into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
