//! 支持工单页面
//!
//! 新建工单（multipart，可带附件）+ 工单列表。

use fleetdesk_shared::SupportStatus;
use fleetdesk_shared::protocol::{CreateSupportRequest, DeleteSupportRequest, ListSupportsRequest};
use fleetdesk_shared::validate::{FieldError, validate_support_ticket};
use leptos::prelude::*;

use crate::api::multipart_form;
use crate::cache::use_tagged_query;
use crate::components::icons::{LifeBuoy, Paperclip, Trash2};
use crate::mutation::MutationController;
use crate::toast::use_toast;

fn status_badge_class(status: Option<SupportStatus>) -> &'static str {
    match status {
        None | Some(SupportStatus::Open) => "badge badge-warning",
        Some(SupportStatus::InProgress) => "badge badge-info",
        Some(SupportStatus::Resolved) => "badge badge-success",
        Some(SupportStatus::Closed) => "badge badge-ghost",
    }
}

#[component]
pub fn SupportPage() -> impl IntoView {
    let toast = use_toast();
    let tickets = use_tagged_query(|| ListSupportsRequest {
        page: None,
        limit: None,
    });
    let create_controller = MutationController::new();
    let delete_controller = MutationController::new();

    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let is_pending = create_controller.is_pending();
    let failure = create_controller.failure();

    let on_submit = {
        let create_controller = create_controller.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let req = CreateSupportRequest {
                subject: subject.get(),
                message: message.get(),
            };
            if let Err(errors) = validate_support_ticket(&req) {
                set_field_errors.set(errors);
                return;
            }
            set_field_errors.set(Vec::new());

            let files = file_input_ref.get().and_then(|input| input.files());
            let form = match multipart_form(&req.form_fields(), files.as_ref()) {
                Ok(form) => form,
                Err(failure) => {
                    toast.error(failure.user_message());
                    return;
                }
            };

            create_controller.submit_multipart(req, form, move || {
                toast.success("Ticket submitted");
                set_subject.set(String::new());
                set_message.set(String::new());
                if let Some(input) = file_input_ref.get_untracked() {
                    input.set_value("");
                }
            });
        }
    };

    let on_delete = {
        let delete_controller = delete_controller.clone();
        move |id: String| {
            delete_controller.submit(DeleteSupportRequest { id }, move || {
                toast.success("Ticket deleted");
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
            <h1 class="text-3xl font-bold">"Support"</h1>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                // --- 新建工单 ---
                <div class="card bg-base-100 shadow-xl h-fit">
                    <div class="card-body">
                        <h2 class="card-title">"Open a Ticket"</h2>
                        <form class="space-y-4 mt-2" on:submit=on_submit>
                            <Show when=move || failure.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || failure.get().unwrap_or_default()}</span>
                                </div>
                            </Show>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Subject"</span>
                                </label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                                    prop:value=subject
                                />
                                <Show when=move || field_error("subject").is_some()>
                                    <span class="label-text-alt text-error mt-1">
                                        {move || field_error("subject").unwrap_or_default()}
                                    </span>
                                </Show>
                            </div>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Message"</span>
                                </label>
                                <textarea
                                    class="textarea textarea-bordered"
                                    rows=4
                                    on:input=move |ev| set_message.set(event_target_value(&ev))
                                    prop:value=message
                                ></textarea>
                                <Show when=move || field_error("message").is_some()>
                                    <span class="label-text-alt text-error mt-1">
                                        {move || field_error("message").unwrap_or_default()}
                                    </span>
                                </Show>
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
                            <button class="btn btn-primary w-full" disabled=move || is_pending.get()>
                                {move || if is_pending.get() {
                                    view! { <span class="loading loading-spinner"></span> "Submitting..." }.into_any()
                                } else {
                                    "Submit Ticket".into_any()
                                }}
                            </button>
                        </form>
                    </div>
                </div>

                // --- 工单列表 ---
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">"Your Tickets"</h2>
                        {move || match tickets.get() {
                            None => view! {
                                <div class="flex justify-center py-8">
                                    <span class="loading loading-spinner loading-lg text-primary"></span>
                                </div>
                            }.into_any(),
                            Some(Err(failure)) => view! {
                                <div role="alert" class="alert alert-error">
                                    <span>{failure.user_message()}</span>
                                </div>
                            }.into_any(),
                            Some(Ok(payload)) if payload.data.is_empty() => view! {
                                <div class="flex flex-col items-center gap-3 py-8 text-base-content/60">
                                    <LifeBuoy class="h-12 w-12" />
                                    <p>"No tickets yet."</p>
                                </div>
                            }.into_any(),
                            Some(Ok(payload)) => {
                                let on_delete = on_delete.clone();
                                view! {
                                    <ul class="divide-y divide-base-200">
                                        {payload
                                            .data
                                            .into_iter()
                                            .map(|ticket| {
                                                let delete_id = ticket.id.clone();
                                                let on_delete = on_delete.clone();
                                                view! {
                                                    <li class="py-3 flex items-start justify-between gap-3">
                                                        <div>
                                                            <p class="font-medium">{ticket.subject.clone()}</p>
                                                            <p class="text-sm text-base-content/70">
                                                                {ticket.message.clone()}
                                                            </p>
                                                        </div>
                                                        <div class="flex items-center gap-2 shrink-0">
                                                            <span class=status_badge_class(ticket.status.clone())>
                                                                {ticket
                                                                    .status
                                                                    .map(|s| s.label())
                                                                    .unwrap_or("Open")}
                                                            </span>
                                                            <button
                                                                class="btn btn-ghost btn-xs text-error"
                                                                on:click=move |_| on_delete(delete_id.clone())
                                                            >
                                                                <Trash2 class="h-4 w-4" />
                                                            </button>
                                                        </div>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }.into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
