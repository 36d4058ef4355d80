use fleetdesk_shared::failure::login_failure_message;
use fleetdesk_shared::protocol::LoginRequest;
use fleetdesk_shared::validate::{FieldError, validate_login};
use leptos::prelude::*;

use crate::components::icons::ShieldCheck;
use crate::mutation::MutationController;
use crate::session::use_session;
use crate::web::router::{Link, use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let controller = MutationController::new();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());

    let is_pending = controller.is_pending();
    let failure = controller.failure();

    // 已登录则直接进入门户
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if session.state.get().email.is_some() {
                navigate("/");
            }
        }
    });

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let req = LoginRequest {
                email: email.get(),
                password: password.get(),
            };
            if let Err(errors) = validate_login(&req) {
                set_field_errors.set(errors);
                return;
            }
            set_field_errors.set(Vec::new());

            let navigate = navigate.clone();
            controller.submit_payload(req, login_failure_message, move |payload| {
                session.store_credential(&payload.data);
                navigate("/");
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
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"FleetDesk"</h1>
                        <p class="text-base-content/70">"Sign in to your fleet account"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || failure.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || failure.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@company.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                            <Show when=move || field_error("email").is_some()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || field_error("email").unwrap_or_default()}
                                </span>
                            </Show>
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                            <Show when=move || field_error("password").is_some()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || field_error("password").unwrap_or_default()}
                                </span>
                            </Show>
                            <label class="label">
                                <Link to="/forgot-password" class="label-text-alt link link-hover">
                                    "Forgot password?"
                                </Link>
                            </label>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_pending.get()>
                                {move || if is_pending.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "No account yet? "
                            <Link to="/register" class="link link-primary">"Register your fleet"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
