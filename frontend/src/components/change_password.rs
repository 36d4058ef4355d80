use fleetdesk_shared::protocol::ChangePasswordRequest;
use fleetdesk_shared::validate::{FieldError, validate_password_change};
use leptos::prelude::*;

use crate::mutation::MutationController;
use crate::toast::use_toast;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let toast = use_toast();
    let controller = MutationController::new();

    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());

    let is_pending = controller.is_pending();
    let failure = controller.failure();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let req = ChangePasswordRequest {
            old_password: old_password.get(),
            new_password: new_password.get(),
        };
        if let Err(errors) = validate_password_change(&req) {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(Vec::new());

        controller.submit(req, move || {
            toast.success("Password updated");
            set_old_password.set(String::new());
            set_new_password.set(String::new());
        });
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
        <div class="max-w-md mx-auto">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h1 class="card-title text-2xl">"Change Password"</h1>
                    <form class="space-y-4 mt-2" on:submit=on_submit>
                        <Show when=move || failure.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || failure.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <div class="form-control">
                            <label class="label" for="old-password">
                                <span class="label-text">"Current Password"</span>
                            </label>
                            <input
                                id="old-password"
                                type="password"
                                on:input=move |ev| set_old_password.set(event_target_value(&ev))
                                prop:value=old_password
                                class="input input-bordered w-full"
                            />
                            <Show when=move || field_error("oldPassword").is_some()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || field_error("oldPassword").unwrap_or_default()}
                                </span>
                            </Show>
                        </div>
                        <div class="form-control">
                            <label class="label" for="new-password">
                                <span class="label-text">"New Password"</span>
                            </label>
                            <input
                                id="new-password"
                                type="password"
                                on:input=move |ev| set_new_password.set(event_target_value(&ev))
                                prop:value=new_password
                                class="input input-bordered w-full"
                            />
                            <Show when=move || field_error("newPassword").is_some()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || field_error("newPassword").unwrap_or_default()}
                                </span>
                            </Show>
                        </div>
                        <button class="btn btn-primary w-full" disabled=move || is_pending.get()>
                            {move || if is_pending.get() {
                                view! { <span class="loading loading-spinner"></span> "Updating..." }.into_any()
                            } else {
                                "Update Password".into_any()
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
