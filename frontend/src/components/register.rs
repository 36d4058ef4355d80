//! 注册页面
//!
//! 车队账户注册：企业信息 + 联系人信息，提交后等待后台审核。

mod form_state;

use fleetdesk_shared::validate::{FieldError, validate_registration};
use fleetdesk_shared::{ADDITIONAL_SERVICES, FleetProgram};
use leptos::prelude::*;

use crate::components::icons::Truck;
use crate::mutation::MutationController;
use crate::toast::use_toast;
use crate::web::router::{Link, use_navigate};
use form_state::RegisterFormState;

/// 文本输入控件（注册表单专用，减少重复模板）
#[component]
fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: &'static str,
    #[prop(into, optional)] input_type: String,
    #[prop(into, optional)] placeholder: String,
    value: RwSignal<String>,
    errors: ReadSignal<Vec<FieldError>>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };
    let message = move || {
        errors.with(|list| {
            list.iter()
                .find(|e| e.field == name)
                .map(|e| e.message.clone())
        })
    };

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=input_type
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered"
            />
            <Show when=move || message().is_some()>
                <span class="label-text-alt text-error mt-1">
                    {move || message().unwrap_or_default()}
                </span>
            </Show>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let toast = use_toast();
    let controller = MutationController::new();
    let form = RegisterFormState::new();

    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());
    let is_pending = controller.is_pending();
    let failure = controller.failure();

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let req = form.to_request();
            if let Err(errors) = validate_registration(&req) {
                set_field_errors.set(errors);
                return;
            }
            set_field_errors.set(Vec::new());

            let navigate = navigate.clone();
            controller.submit(req, move || {
                toast.success("Registration submitted. We will be in touch shortly.");
                form.reset();
                navigate("/login");
            });
        }
    };

    let on_program_change = move |ev: leptos::web_sys::Event| {
        let value = event_target_value(&ev);
        if let Some(program) = FleetProgram::ALL.iter().find(|p| p.label() == value) {
            form.fleet_program.set(*program);
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 py-8 px-4">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="text-center">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Truck class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Register Your Fleet"</h1>
                        <p class="text-base-content/70">
                            "Tell us about your business and we will set up your account"
                        </p>
                    </div>
                </div>

                <form class="space-y-6" on:submit=on_submit>
                    <Show when=move || failure.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || failure.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    // --- 企业信息 ---
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">"Business Information"</h2>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <TextField label="Business Name" name="businessName" value=form.business_name errors=field_errors />
                                <TextField label="Years in Business" name="numberOfBusinessYear" value=form.years_in_business errors=field_errors />
                                <TextField label="City" name="city" value=form.city errors=field_errors />
                                <TextField label="State" name="state" value=form.state errors=field_errors />
                                <TextField label="Number of Vehicles" name="numberOFvehicles" placeholder="5 or more" value=form.number_of_vehicles errors=field_errors />
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"How did you hear about the fleet program?"</span>
                                    </label>
                                    <select class="select select-bordered" on:change=on_program_change>
                                        {FleetProgram::ALL
                                            .iter()
                                            .map(|p| {
                                                let selected = form.fleet_program.get_untracked() == *p;
                                                view! {
                                                    <option value=p.label() selected=selected>{p.label()}</option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                            </div>

                            <div class="grid grid-cols-1 md:grid-cols-3 gap-2 mt-2">
                                <label class="label cursor-pointer justify-start gap-3">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-primary"
                                        prop:checked=form.more_location
                                        on:change=move |ev| form.more_location.set(event_target_checked(&ev))
                                    />
                                    <span class="label-text">"More than one location"</span>
                                </label>
                                <label class="label cursor-pointer justify-start gap-3">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-primary"
                                        prop:checked=form.central_location
                                        on:change=move |ev| form.central_location.set(event_target_checked(&ev))
                                    />
                                    <span class="label-text">"Centrally billed"</span>
                                </label>
                                <label class="label cursor-pointer justify-start gap-3">
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-primary"
                                        prop:checked=form.preferred_location
                                        on:change=move |ev| form.preferred_location.set(event_target_checked(&ev))
                                    />
                                    <span class="label-text">"Has a preferred store"</span>
                                </label>
                            </div>

                            <div class="divider my-2"></div>
                            <h3 class="font-semibold">"Additional Services"</h3>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-2">
                                {ADDITIONAL_SERVICES
                                    .iter()
                                    .map(|service| {
                                        let service = *service;
                                        view! {
                                            <label class="label cursor-pointer justify-start gap-3">
                                                <input
                                                    type="checkbox"
                                                    class="checkbox checkbox-sm checkbox-primary"
                                                    prop:checked=move || form.has_service(service)
                                                    on:change=move |_| form.toggle_service(service)
                                                />
                                                <span class="label-text">{service}</span>
                                            </label>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    // --- 联系人信息 ---
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">"Contact Information"</h2>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <TextField label="First Name" name="firstName" value=form.first_name errors=field_errors />
                                <TextField label="Last Name" name="lastName" value=form.last_name errors=field_errors />
                                <TextField label="Title" name="title" value=form.title errors=field_errors />
                                <TextField label="Phone" name="phone" input_type="tel" value=form.phone errors=field_errors />
                                <TextField label="Extension (optional)" name="phoneExtension" value=form.phone_extension errors=field_errors />
                                <TextField label="Email" name="email" input_type="email" value=form.email errors=field_errors />
                                <TextField label="Password" name="password" input_type="password" value=form.password errors=field_errors />
                            </div>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Additional Comments (optional)"</span>
                                </label>
                                <textarea
                                    class="textarea textarea-bordered"
                                    rows=3
                                    on:input=move |ev| form.additional_comments.set(event_target_value(&ev))
                                    prop:value=form.additional_comments
                                ></textarea>
                            </div>
                        </div>
                    </div>

                    <div class="flex items-center justify-between">
                        <Link to="/login" class="link link-hover text-sm">
                            "Already registered? Sign in"
                        </Link>
                        <button class="btn btn-primary" disabled=move || is_pending.get()>
                            {move || if is_pending.get() {
                                view! { <span class="loading loading-spinner"></span> "Submitting..." }.into_any()
                            } else {
                                "Submit Registration".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
