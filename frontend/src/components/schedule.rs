//! 预约服务页面
//!
//! 预约表单走 multipart：标量字段 + 可选附件（照片等）。提交成功后
//! 作废 FleetAppointments 标签并跳转到预约列表。

use fleetdesk_shared::ServiceType;
use fleetdesk_shared::protocol::{CreateAppointmentRequest, ListVehiclesRequest};
use fleetdesk_shared::validate::{FieldError, validate_appointment};
use leptos::prelude::*;

use crate::api::multipart_form;
use crate::cache::use_tagged_query;
use crate::components::icons::Paperclip;
use crate::mutation::MutationController;
use crate::toast::use_toast;
use crate::web::router::use_navigate;

#[component]
pub fn SchedulePage() -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();
    let controller = MutationController::new();

    let vehicles = use_tagged_query(|| ListVehiclesRequest {});

    let (vehicle_id, set_vehicle_id) = signal(String::new());
    let (service_type, set_service_type) = signal(ServiceType::default());
    let (date, set_date) = signal(String::new());
    let (time, set_time) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let is_pending = controller.is_pending();
    let failure = controller.failure();

    let on_service_change = move |ev: leptos::web_sys::Event| {
        let value = event_target_value(&ev);
        if let Some(service) = ServiceType::ALL.iter().find(|s| s.label() == value) {
            set_service_type.set(*service);
        }
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let trimmed_notes = notes.get();
            let req = CreateAppointmentRequest {
                fleet_vehicle: vehicle_id.get(),
                service_type: service_type.get(),
                date: date.get(),
                time: time.get(),
                address: address.get(),
                notes: if trimmed_notes.trim().is_empty() {
                    None
                } else {
                    Some(trimmed_notes)
                },
            };
            if let Err(errors) = validate_appointment(&req) {
                set_field_errors.set(errors);
                return;
            }
            set_field_errors.set(Vec::new());

            // 附件来自未受控的 file input
            let files = file_input_ref.get().and_then(|input| input.files());
            let form = match multipart_form(&req.form_fields(), files.as_ref()) {
                Ok(form) => form,
                Err(failure) => {
                    toast.error(failure.user_message());
                    return;
                }
            };

            let navigate = navigate.clone();
            controller.submit_multipart(req, form, move || {
                toast.success("Appointment requested");
                navigate("/may-appointments");
            });
        }
    };

    let field_error = move |field: &'static str| {
        field_errors.with(|errors| {
            errors
                .iter()
                .find(|e| e.field == field)
                .map(|e| e.message.clone())
        })
    };

    view! {
        <div class="max-w-2xl mx-auto">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h1 class="card-title text-2xl">"Schedule Service"</h1>
                    <p class="text-base-content/70 text-sm">
                        "Request a tire-service appointment for one of your vehicles."
                    </p>

                    <form class="space-y-4 mt-4" on:submit=on_submit>
                        <Show when=move || failure.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || failure.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Vehicle"</span>
                            </label>
                            <select
                                class="select select-bordered"
                                on:change=move |ev| set_vehicle_id.set(event_target_value(&ev))
                            >
                                <option value="" selected=true disabled=true>"Select a vehicle"</option>
                                {move || match vehicles.get() {
                                    Some(Ok(payload)) => payload
                                        .data
                                        .into_iter()
                                        .map(|v| {
                                            let label = format!("{} {} {} — {}", v.year, v.make, v.model, v.license_plate);
                                            view! { <option value=v.id>{label}</option> }
                                        })
                                        .collect_view()
                                        .into_any(),
                                    _ => ().into_any(),
                                }}
                            </select>
                            <Show when=move || field_error("fleetVehicle").is_some()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || field_error("fleetVehicle").unwrap_or_default()}
                                </span>
                            </Show>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Service Type"</span>
                            </label>
                            <select class="select select-bordered" on:change=on_service_change>
                                {ServiceType::ALL
                                    .iter()
                                    .map(|s| view! {
                                        <option
                                            value=s.label()
                                            selected=*s == ServiceType::default()
                                        >
                                            {s.label()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Date"</span>
                                </label>
                                <input
                                    type="date"
                                    class="input input-bordered"
                                    on:input=move |ev| set_date.set(event_target_value(&ev))
                                    prop:value=date
                                />
                                <Show when=move || field_error("date").is_some()>
                                    <span class="label-text-alt text-error mt-1">
                                        {move || field_error("date").unwrap_or_default()}
                                    </span>
                                </Show>
                            </div>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Time"</span>
                                </label>
                                <input
                                    type="time"
                                    class="input input-bordered"
                                    on:input=move |ev| set_time.set(event_target_value(&ev))
                                    prop:value=time
                                />
                                <Show when=move || field_error("time").is_some()>
                                    <span class="label-text-alt text-error mt-1">
                                        {move || field_error("time").unwrap_or_default()}
                                    </span>
                                </Show>
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Service Address"</span>
                            </label>
                            <input
                                type="text"
                                placeholder="Where should we meet the vehicle?"
                                class="input input-bordered"
                                on:input=move |ev| set_address.set(event_target_value(&ev))
                                prop:value=address
                            />
                            <Show when=move || field_error("address").is_some()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || field_error("address").unwrap_or_default()}
                                </span>
                            </Show>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Notes (optional)"</span>
                            </label>
                            <textarea
                                class="textarea textarea-bordered"
                                rows=3
                                on:input=move |ev| set_notes.set(event_target_value(&ev))
                                prop:value=notes
                            ></textarea>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text flex items-center gap-2">
                                    <Paperclip class="h-4 w-4" /> "Attachments (optional)"
                                </span>
                            </label>
                            <input
                                type="file"
                                multiple=true
                                class="file-input file-input-bordered"
                                node_ref=file_input_ref
                            />
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_pending.get()>
                                {move || if is_pending.get() {
                                    view! { <span class="loading loading-spinner"></span> "Requesting..." }.into_any()
                                } else {
                                    "Request Appointment".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
