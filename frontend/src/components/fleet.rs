//! 车辆管理页面
//!
//! 车辆列表 + 新增/编辑对话框 + 删除。所有写操作成功后作废
//! FleetVehicles 标签，列表随即自动重新拉取。

mod form_state;

use fleetdesk_shared::Vehicle;
use fleetdesk_shared::protocol::{DeleteVehicleRequest, ListVehiclesRequest};
use fleetdesk_shared::validate::{FieldError, validate_vehicle};
use leptos::prelude::*;

use crate::cache::use_tagged_query;
use crate::components::icons::{Pencil, Plus, Trash2, Truck};
use crate::mutation::MutationController;
use crate::toast::use_toast;
use form_state::VehicleFormState;

#[component]
pub fn FleetPage() -> impl IntoView {
    let toast = use_toast();
    let vehicles = use_tagged_query(|| ListVehiclesRequest {});

    let form = VehicleFormState::new();
    let save_controller = MutationController::new();
    let delete_controller = MutationController::new();

    let (open, set_open) = signal(false);
    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let is_saving = save_controller.is_pending();
    let save_failure = save_controller.failure();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let open_create = move |_| {
        form.reset();
        set_field_errors.set(Vec::new());
        set_open.set(true);
    };
    let open_edit = move |vehicle: &Vehicle| {
        form.load(vehicle);
        set_field_errors.set(Vec::new());
        set_open.set(true);
    };

    let on_submit = {
        let save_controller = save_controller.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            // 编辑与新增共用同一套字段校验
            if let Err(errors) = validate_vehicle(&form.to_create_request()) {
                set_field_errors.set(errors);
                return;
            }
            set_field_errors.set(Vec::new());

            let done = move || {
                toast.success("Vehicle saved");
                set_open.set(false);
                form.reset();
            };
            match form.editing_id.get() {
                Some(id) => save_controller.submit(form.to_update_request(id), done),
                None => save_controller.submit(form.to_create_request(), done),
            }
        }
    };

    let on_delete = {
        let delete_controller = delete_controller.clone();
        move |id: String| {
            delete_controller.submit(DeleteVehicleRequest { id }, move || {
                toast.success("Vehicle removed");
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
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"My Fleet"</h1>
                <button class="btn btn-primary gap-2" on:click=open_create>
                    <Plus class="h-4 w-4" /> "Add Vehicle"
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0 md:p-4 overflow-x-auto">
                    {move || match vehicles.get() {
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
                                <Truck class="h-12 w-12" />
                                <p>"No vehicles yet. Add your first vehicle to get started."</p>
                            </div>
                        }.into_any(),
                        Some(Ok(payload)) => {
                            let on_delete = on_delete.clone();
                            view! {
                                <table class="table table-zebra">
                                    <thead>
                                        <tr>
                                            <th>"Year"</th>
                                            <th>"Make / Model"</th>
                                            <th>"VIN"</th>
                                            <th>"License Plate"</th>
                                            <th>"Tire Size"</th>
                                            <th class="text-right">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {payload
                                            .data
                                            .into_iter()
                                            .map(|vehicle| {
                                                let edit_target = vehicle.clone();
                                                let delete_id = vehicle.id.clone();
                                                let on_delete = on_delete.clone();
                                                view! {
                                                    <tr>
                                                        <td>{vehicle.year.clone()}</td>
                                                        <td class="font-medium">
                                                            {format!("{} {}", vehicle.make, vehicle.model)}
                                                        </td>
                                                        <td class="font-mono text-xs">{vehicle.vin.clone()}</td>
                                                        <td>{vehicle.license_plate.clone()}</td>
                                                        <td>{vehicle.tire_size.clone()}</td>
                                                        <td class="text-right">
                                                            <div class="join">
                                                                <button
                                                                    class="btn btn-ghost btn-sm join-item"
                                                                    on:click=move |_| open_edit(&edit_target)
                                                                >
                                                                    <Pencil class="h-4 w-4" />
                                                                </button>
                                                                <button
                                                                    class="btn btn-ghost btn-sm join-item text-error"
                                                                    on:click=move |_| on_delete(delete_id.clone())
                                                                >
                                                                    <Trash2 class="h-4 w-4" />
                                                                </button>
                                                            </div>
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

            // 新增/编辑对话框
            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if form.is_editing() { "Edit Vehicle" } else { "Add Vehicle" }}
                    </h3>

                    <form on:submit=on_submit class="space-y-4 mt-4">
                        <Show when=move || save_failure.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || save_failure.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="grid grid-cols-2 gap-4">
                            <VehicleField label="Year" value=form.year error=Signal::derive(move || field_error("year")) />
                            <VehicleField label="Make" value=form.make error=Signal::derive(move || field_error("make")) />
                            <VehicleField label="Model" value=form.model error=Signal::derive(move || field_error("model")) />
                            <VehicleField label="Tire Size" value=form.tire_size error=Signal::derive(move || field_error("tireSize")) />
                            <VehicleField label="VIN" value=form.vin error=Signal::derive(move || field_error("vin")) />
                            <VehicleField label="License Plate" value=form.license_plate error=Signal::derive(move || field_error("licensePlate")) />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Note (optional)"</span>
                            </label>
                            <textarea
                                class="textarea textarea-bordered"
                                rows=2
                                on:input=move |ev| form.note.set(event_target_value(&ev))
                                prop:value=form.note
                            ></textarea>
                        </div>

                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| set_open.set(false)
                            >
                                "Cancel"
                            </button>
                            <button class="btn btn-primary" disabled=move || is_saving.get()>
                                {move || if is_saving.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                } else {
                                    "Save Vehicle".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </dialog>
        </div>
    }
}

#[component]
fn VehicleField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type="text"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered"
            />
            <Show when=move || error.get().is_some()>
                <span class="label-text-alt text-error mt-1">
                    {move || error.get().unwrap_or_default()}
                </span>
            </Show>
        </div>
    }
}
