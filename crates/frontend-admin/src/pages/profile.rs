//! Profile page
//!
//! Edits here update the backend and patch the local `userInfo` cache; the
//! token claims are untouched until the next sign-in.

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::shared::{ErrorAlert, PageHeader};
use crate::services::profile::{ProfileService, ProfileUpdateRequest};

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let saved = use_state(|| false);

    let role = use_state(String::new);
    let name = use_state(String::new);
    let email = use_state(String::new);

    {
        let is_loading = is_loading.clone();
        let error = error.clone();
        let role = role.clone();
        let name = name.clone();
        let email = email.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ProfileService::new().get().await {
                    Ok(profile) => {
                        role.set(profile.role);
                        name.set(profile.name);
                        email.set(profile.email);
                    }
                    Err(err) => error.set(Some(format!("Could not load profile: {err}"))),
                }
                is_loading.set(false);
            });
        });
    }

    let on_name = {
        let name = name.clone();
        let saved = saved.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            saved.set(false);
        })
    };
    let on_email = {
        let email = email.clone();
        let saved = saved.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            saved.set(false);
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let error = error.clone();
        let saved = saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = ProfileUpdateRequest {
                name: (*name).clone(),
                email: (*email).clone(),
            };
            let error = error.clone();
            let saved = saved.clone();
            spawn_local(async move {
                match ProfileService::new().update(&request).await {
                    Ok(_) => {
                        error.set(None);
                        saved.set(true);
                    }
                    Err(err) => error.set(Some(format!("Save failed: {err}"))),
                }
            });
        })
    };

    html! {
        <div class="p-6 max-w-lg mx-auto">
            <PageHeader title="Profile" subtitle={Some("Your account details")} />
            <ErrorAlert message={(*error).clone()} />
            if *saved {
                <div class="mb-4 p-3 bg-emerald-50 border border-emerald-200 text-emerald-800 text-sm rounded-md">
                    {"Profile saved. The header updates on your next sign-in."}
                </div>
            }

            if *is_loading {
                <p class="text-sm text-gray-500">{"Loading profile..."}</p>
            } else {
                <form onsubmit={on_submit} class="bg-white border border-gray-200 rounded-lg p-4 space-y-4">
                    <div>
                        <label class="block text-xs font-medium text-gray-500 mb-1">{"Role"}</label>
                        <p class="text-sm text-gray-900">{(*role).clone()}</p>
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 mb-1">{"Display name"}</label>
                        <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full" required=true
                            value={(*name).clone()} oninput={on_name} />
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 mb-1">{"Email"}</label>
                        <input type="email" class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full" required=true
                            value={(*email).clone()} oninput={on_email} />
                    </div>
                    <button type="submit" class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white text-sm font-medium rounded-md">
                        {"Save changes"}
                    </button>
                </form>
            }
        </div>
    }
}
