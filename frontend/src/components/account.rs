//! 账户资料页面
//!
//! 拉取当前用户资料并允许编辑；保存成功后作废 FleetUser 标签。

use fleetdesk_shared::UserProfile;
use fleetdesk_shared::protocol::{MyProfileRequest, UpdateProfileRequest};
use leptos::prelude::*;

use crate::cache::use_tagged_query;
use crate::mutation::MutationController;
use crate::toast::use_toast;
use crate::web::router::Link;

#[component]
pub fn AccountPage() -> impl IntoView {
    let profile = use_tagged_query(|| MyProfileRequest {});

    view! {
        <div class="max-w-2xl mx-auto">
            {move || match profile.get() {
                None => view! {
                    <div class="flex justify-center py-12">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }.into_any(),
                Some(Err(failure)) => view! {
                    <div role="alert" class="alert alert-error">
                        <span>{failure.user_message()}</span>
                    </div>
                }.into_any(),
                Some(Ok(payload)) => view! {
                    <ProfileForm profile=payload.data />
                }.into_any(),
            }}
        </div>
    }
}

/// 资料编辑表单；首次渲染时用服务端数据填充
#[component]
fn ProfileForm(profile: UserProfile) -> impl IntoView {
    let toast = use_toast();
    let controller = MutationController::new();

    let profile_id = profile.id.clone();
    let email = profile.email.clone();

    let business_name = RwSignal::new(profile.business_name.clone());
    let first_name = RwSignal::new(profile.first_name.clone());
    let last_name = RwSignal::new(profile.last_name.clone());
    let phone = RwSignal::new(profile.phone.clone());
    let city = RwSignal::new(profile.city.clone());
    let state = RwSignal::new(profile.state.clone());

    let is_pending = controller.is_pending();
    let failure = controller.failure();

    let on_submit = {
        let controller = controller.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let req = UpdateProfileRequest {
                id: profile_id.clone(),
                business_name: Some(business_name.get()),
                first_name: Some(first_name.get()),
                last_name: Some(last_name.get()),
                phone: Some(phone.get()),
                city: Some(city.get()),
                state: Some(state.get()),
            };
            controller.submit(req, move || toast.success("Profile saved"));
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-2xl">"My Account"</h1>
                <p class="text-sm text-base-content/70">{email}</p>

                <form class="space-y-4 mt-4" on:submit=on_submit>
                    <Show when=move || failure.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || failure.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Business Name"</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered"
                            on:input=move |ev| business_name.set(event_target_value(&ev))
                            prop:value=business_name
                        />
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"First Name"</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                                prop:value=first_name
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Last Name"</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                                prop:value=last_name
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Phone"</span>
                            </label>
                            <input
                                type="tel"
                                class="input input-bordered"
                                on:input=move |ev| phone.set(event_target_value(&ev))
                                prop:value=phone
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"City"</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| city.set(event_target_value(&ev))
                                prop:value=city
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"State"</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| state.set(event_target_value(&ev))
                                prop:value=state
                            />
                        </div>
                    </div>

                    <div class="flex items-center justify-between mt-2">
                        <Link to="/change-password" class="link link-hover text-sm">
                            "Change password"
                        </Link>
                        <button class="btn btn-primary" disabled=move || is_pending.get()>
                            {move || if is_pending.get() {
                                view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                            } else {
                                "Save Changes".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
