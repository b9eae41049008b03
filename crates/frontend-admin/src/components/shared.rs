//! Small shared UI pieces used across the CRUD pages

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-gray-900">{props.title}</h2>
            if let Some(subtitle) = props.subtitle {
                <p class="text-gray-500 text-sm mt-1">{subtitle}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: Option<String>,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="mb-4 p-3 bg-red-50 border border-red-200 text-red-700 text-sm rounded-md">
                {message.clone()}
            </div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: &'static str,
    pub description: String,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="text-center py-12 bg-white border border-dashed border-gray-300 rounded-lg">
            <h3 class="text-sm font-medium text-gray-900">{props.title}</h3>
            <p class="text-sm text-gray-500 mt-1">{props.description.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub active: bool,
    pub active_label: &'static str,
    pub inactive_label: &'static str,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let (classes, label) = if props.active {
        (
            "px-2 py-0.5 text-xs font-medium rounded-full bg-emerald-100 text-emerald-800",
            props.active_label,
        )
    } else {
        (
            "px-2 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-600",
            props.inactive_label,
        )
    };
    html! { <span class={classes}>{label}</span> }
}
