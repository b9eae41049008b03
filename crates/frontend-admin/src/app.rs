//! Application shell and routing

use metroline_frontend_common::{use_auth, AuthProvider, LoadingSpinner};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::{
    fares::FaresPage, lines::LinesPage, login::LoginPage, news::NewsPage, profile::ProfilePage,
    roles::RolesPage, shifts::ShiftsPage, stations::StationsPage, templates::TemplatesPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/stations")]
    Stations,
    #[at("/lines")]
    Lines,
    #[at("/fares")]
    Fares,
    #[at("/shifts")]
    Shifts,
    #[at("/news")]
    News,
    #[at("/templates")]
    Templates,
    #[at("/roles")]
    Roles,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <Switch<Route> render={switch} />
            </AuthProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Home => protected(html! { <HomePage /> }),
        Route::Stations => protected(html! { <StationsPage /> }),
        Route::Lines => protected(html! { <LinesPage /> }),
        Route::Fares => protected(html! { <FaresPage /> }),
        Route::Shifts => protected(html! { <ShiftsPage /> }),
        Route::News => protected(html! { <NewsPage /> }),
        Route::Templates => protected(html! { <TemplatesPage /> }),
        Route::Roles => protected(html! { <RolesPage /> }),
        Route::Profile => protected(html! { <ProfilePage /> }),
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center">
                <p class="text-gray-500">{"Page not found"}</p>
            </div>
        },
    }
}

fn protected(page: Html) -> Html {
    html! { <RequireAuth>{page}</RequireAuth> }
}

#[derive(Properties, PartialEq)]
struct RequireAuthProps {
    children: Children,
}

/// Gate for authenticated screens: waits for the stored session check, then
/// either renders the layout or bounces to the login page.
#[function_component(RequireAuth)]
fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();

    if auth.is_loading {
        return html! { <LoadingSpinner text="Loading..." /> };
    }

    if auth.session.is_none() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    html! {
        <Layout>
            {props.children.clone()}
        </Layout>
    }
}

#[function_component(HomePage)]
fn home_page() -> Html {
    html! {
        <div class="p-6">
            <h2 class="text-2xl font-bold text-gray-900 mb-2">{"Operations overview"}</h2>
            <p class="text-gray-600 mb-6">
                {"Manage the network, ticketing and staff from the sections in the navigation bar."}
            </p>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                <HomeCard title="Stations" description="Station registry and service status" route={Route::Stations} />
                <HomeCard title="Lines" description="Line registry and termini" route={Route::Lines} />
                <HomeCard title="Fares" description="Fare products and pricing" route={Route::Fares} />
                <HomeCard title="Shifts" description="Staff scheduling" route={Route::Shifts} />
                <HomeCard title="News" description="Rider-facing announcements" route={Route::News} />
                <HomeCard title="Templates" description="Email templates" route={Route::Templates} />
                <HomeCard title="Roles" description="Role administration" route={Route::Roles} />
                <HomeCard title="Profile" description="Your account" route={Route::Profile} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HomeCardProps {
    title: &'static str,
    description: &'static str,
    route: Route,
}

#[function_component(HomeCard)]
fn home_card(props: &HomeCardProps) -> Html {
    html! {
        <Link<Route> to={props.route.clone()} classes="block bg-white border border-gray-200 rounded-lg p-4 hover:border-emerald-500 hover:shadow transition-shadow">
            <h3 class="font-semibold text-gray-900">{props.title}</h3>
            <p class="text-sm text-gray-500 mt-1">{props.description}</p>
        </Link<Route>>
    }
}
