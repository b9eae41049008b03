//! Login page

use metroline_frontend_common::{session, use_auth, AuthAction};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::auth::AuthApiService;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("login rendered outside a router");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);
    // One-shot notice left behind by a forced logout on this tab.
    let notice = use_state(session::take_session_notice);

    if auth.session.is_some() {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let auth = auth.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();

            is_submitting.set(true);
            error.set(None);
            spawn_local(async move {
                match AuthApiService::new().login(email_value, password_value).await {
                    Ok(pair) => {
                        auth.dispatch(AuthAction::Login(pair));
                        navigator.replace(&Route::Home);
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "login failed");
                        error.set(Some("Sign-in failed. Check your email and password.".into()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="w-full max-w-sm">
                <h1 class="text-2xl font-bold text-emerald-700 text-center mb-1">{"Metroline"}</h1>
                <p class="text-sm text-gray-500 text-center mb-6">{"Operator console"}</p>

                if let Some(notice) = (*notice).clone() {
                    <div class="mb-4 p-3 bg-amber-50 border border-amber-200 text-amber-800 text-sm rounded-md">
                        {notice}
                    </div>
                }
                if let Some(message) = auth.error.clone() {
                    <div class="mb-4 p-3 bg-amber-50 border border-amber-200 text-amber-800 text-sm rounded-md">
                        {message}
                    </div>
                }
                if let Some(message) = (*error).clone() {
                    <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 text-sm rounded-md">
                        {message}
                    </div>
                }

                <form onsubmit={on_submit} class="bg-white border border-gray-200 rounded-lg p-6 space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                        <input
                            type="email"
                            required=true
                            class="block w-full px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-1 focus:ring-emerald-500"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                        <input
                            type="password"
                            required=true
                            class="block w-full px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-1 focus:ring-emerald-500"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full py-2 bg-emerald-600 hover:bg-emerald-700 disabled:opacity-50 text-white text-sm font-medium rounded-md"
                    >
                        {if *is_submitting { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
