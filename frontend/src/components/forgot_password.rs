use fleetdesk_shared::protocol::ForgotPasswordRequest;
use leptos::prelude::*;

use crate::mutation::MutationController;
use crate::web::router::Link;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let controller = MutationController::new();

    let (email, set_email) = signal(String::new());
    let (sent, set_sent) = signal(false);

    let is_pending = controller.is_pending();
    let failure = controller.failure();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let req = ForgotPasswordRequest { email: email.get() };
        if req.email.trim().is_empty() {
            return;
        }
        controller.submit(req, move || set_sent.set(true));
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <h1 class="card-title text-2xl">"Forgot Password"</h1>
                        <Show
                            when=move || !sent.get()
                            fallback=|| view! {
                                <div role="alert" class="alert alert-success text-sm">
                                    <span>"If an account exists for that address, a reset link is on its way."</span>
                                </div>
                            }
                        >
                            <p class="text-base-content/70 text-sm">
                                "Enter your account email and we will send you a reset link."
                            </p>
                            <form class="space-y-4 mt-2" on:submit=on_submit.clone()>
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
                                        class="input input-bordered w-full"
                                        required
                                    />
                                </div>
                                <button class="btn btn-primary w-full" disabled=move || is_pending.get()>
                                    {move || if is_pending.get() {
                                        view! { <span class="loading loading-spinner"></span> "Sending..." }.into_any()
                                    } else {
                                        "Send Reset Link".into_any()
                                    }}
                                </button>
                            </form>
                        </Show>
                        <p class="text-center text-sm mt-2">
                            <Link to="/login" class="link link-hover">"Back to sign in"</Link>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
