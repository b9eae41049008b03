//! Authenticated page layout

use metroline_frontend_common::{use_auth, use_auth_session, AuthAction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::auth::AuthApiService;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

const NAV_ITEMS: [(&str, Route); 7] = [
    ("Stations", Route::Stations),
    ("Lines", Route::Lines),
    ("Fares", Route::Fares),
    ("Shifts", Route::Shifts),
    ("News", Route::News),
    ("Templates", Route::Templates),
    ("Roles", Route::Roles),
];

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let auth = use_auth();
    let session = use_auth_session();
    let navigator = use_navigator().expect("layout rendered outside a router");
    let current = use_route::<Route>();

    let on_logout = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let auth = auth.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Best-effort: the local session is cleared no matter what
                // the backend answers.
                if let Err(err) = AuthApiService::new().logout().await {
                    tracing::debug!(error = %err, "server-side logout failed");
                }
                auth.dispatch(AuthAction::Logout);
                navigator.replace(&Route::Login);
            });
        })
    };

    let display_name = session
        .as_ref()
        .map(|s| {
            if s.name.is_empty() {
                s.email.clone()
            } else {
                s.name.clone()
            }
        })
        .unwrap_or_default();

    html! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="bg-white border-b border-gray-200">
                <div class="px-4 flex justify-between items-center h-14">
                    <div class="flex items-center gap-6">
                        <Link<Route> to={Route::Home} classes="text-lg font-bold text-emerald-700">
                            {"Metroline"}
                        </Link<Route>>
                        <nav class="flex gap-1">
                            {NAV_ITEMS.iter().map(|(label, route)| {
                                let active = current.as_ref() == Some(route);
                                let classes = if active {
                                    "px-3 py-2 text-sm font-medium text-emerald-700 border-b-2 border-emerald-600"
                                } else {
                                    "px-3 py-2 text-sm font-medium text-gray-600 hover:text-gray-900"
                                };
                                html! {
                                    <Link<Route> to={route.clone()} classes={classes}>
                                        {*label}
                                    </Link<Route>>
                                }
                            }).collect::<Html>()}
                        </nav>
                    </div>
                    <div class="flex items-center gap-3">
                        <Link<Route> to={Route::Profile} classes="text-sm text-gray-700 hover:text-gray-900">
                            {display_name}
                        </Link<Route>>
                        <button
                            onclick={on_logout}
                            class="px-3 py-1.5 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-md"
                        >
                            {"Sign out"}
                        </button>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                {props.children.clone()}
            </main>
        </div>
    }
}
