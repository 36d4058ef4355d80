use fleetdesk_shared::protocol::ResetPasswordRequest;
use fleetdesk_shared::validate::{FieldError, validate_password_reset};
use leptos::prelude::*;

use crate::mutation::MutationController;
use crate::web::router::{Link, use_navigate};

/// 重置密码页面。`token` 来自邮件链接的查询参数，缺失时表单不可提交。
#[component]
pub fn ResetPasswordPage(#[prop(optional_no_strip)] token: Option<String>) -> impl IntoView {
    let navigate = use_navigate();
    let controller = MutationController::new();

    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());

    let is_pending = controller.is_pending();
    let failure = controller.failure();
    let has_token = token.is_some();

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let Some(token) = token.clone() else {
                return;
            };
            if new_password.get() != confirm.get() {
                set_field_errors.set(vec![FieldError {
                    field: "confirmPassword",
                    message: "Passwords do not match".to_string(),
                }]);
                return;
            }

            let req = ResetPasswordRequest {
                token,
                new_password: new_password.get(),
            };
            if let Err(errors) = validate_password_reset(&req) {
                set_field_errors.set(errors);
                return;
            }
            set_field_errors.set(Vec::new());

            let navigate = navigate.clone();
            controller.submit(req, move || navigate("/login"));
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
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <h1 class="card-title text-2xl">"Reset Password"</h1>
                        <Show when=move || !has_token>
                            <div role="alert" class="alert alert-warning text-sm">
                                <span>"This reset link is invalid or incomplete. Request a new one."</span>
                            </div>
                        </Show>
                        <form class="space-y-4 mt-2" on:submit=on_submit>
                            <Show when=move || failure.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || failure.get().unwrap_or_default()}</span>
                                </div>
                            </Show>
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
                            <div class="form-control">
                                <label class="label" for="confirm-password">
                                    <span class="label-text">"Confirm Password"</span>
                                </label>
                                <input
                                    id="confirm-password"
                                    type="password"
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    prop:value=confirm
                                    class="input input-bordered w-full"
                                />
                                <Show when=move || field_error("confirmPassword").is_some()>
                                    <span class="label-text-alt text-error mt-1">
                                        {move || field_error("confirmPassword").unwrap_or_default()}
                                    </span>
                                </Show>
                            </div>
                            <button
                                class="btn btn-primary w-full"
                                disabled=move || is_pending.get() || !has_token
                            >
                                {move || if is_pending.get() {
                                    view! { <span class="loading loading-spinner"></span> "Resetting..." }.into_any()
                                } else {
                                    "Reset Password".into_any()
                                }}
                            </button>
                        </form>
                        <p class="text-center text-sm mt-2">
                            <Link to="/forgot-password" class="link link-hover">"Request a new link"</Link>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
