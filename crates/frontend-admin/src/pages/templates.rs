//! Email template page

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::shared::{EmptyState, ErrorAlert, PageHeader};
use crate::services::template::{EmailTemplate, EmailTemplateRequest, TemplateService};

#[function_component(TemplatesPage)]
pub fn templates_page() -> Html {
    let templates = use_state(Vec::<EmailTemplate>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let saved = use_state(|| Option::<String>::None);
    let reload = use_state(|| 0u32);

    // The template selected for editing, with its working copy.
    let selected = use_state(|| Option::<String>::None);
    let subject = use_state(String::new);
    let body = use_state(String::new);

    {
        let templates = templates.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            is_loading.set(true);
            spawn_local(async move {
                match TemplateService::new().list().await {
                    Ok(list) => {
                        error.set(None);
                        templates.set(list);
                    }
                    Err(err) => error.set(Some(format!("Could not load templates: {err}"))),
                }
                is_loading.set(false);
            });
        });
    }

    let on_select = {
        let selected = selected.clone();
        let subject = subject.clone();
        let body = body.clone();
        let saved = saved.clone();
        Callback::from(move |template: EmailTemplate| {
            selected.set(Some(template.key.clone()));
            subject.set(template.subject.clone());
            body.set(template.body.clone());
            saved.set(None);
        })
    };

    let on_subject = {
        let subject = subject.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            subject.set(input.value());
        })
    };
    let on_body = {
        let body = body.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            body.set(area.value());
        })
    };

    let on_submit = {
        let selected = selected.clone();
        let subject = subject.clone();
        let body = body.clone();
        let error = error.clone();
        let saved = saved.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(key) = (*selected).clone() else {
                return;
            };
            let request = EmailTemplateRequest {
                subject: (*subject).clone(),
                body: (*body).clone(),
            };
            let error = error.clone();
            let saved = saved.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match TemplateService::new().update(&key, &request).await {
                    Ok(_) => {
                        saved.set(Some(format!("Template '{key}' saved.")));
                        reload.set(*reload + 1);
                    }
                    Err(err) => error.set(Some(format!("Save failed: {err}"))),
                }
            });
        })
    };

    html! {
        <div class="p-6 max-w-5xl mx-auto">
            <PageHeader title="Email templates" subtitle={Some("Messages sent to riders and staff")} />
            <ErrorAlert message={(*error).clone()} />
            if let Some(message) = (*saved).clone() {
                <div class="mb-4 p-3 bg-emerald-50 border border-emerald-200 text-emerald-800 text-sm rounded-md">
                    {message}
                </div>
            }

            if *is_loading {
                <p class="text-sm text-gray-500">{"Loading templates..."}</p>
            } else if templates.is_empty() {
                <EmptyState title="No templates" description={"The backend exposes no templates.".to_string()} />
            } else {
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="bg-white border border-gray-200 rounded-lg divide-y divide-gray-200">
                        {templates.iter().map(|template| {
                            let is_selected = selected.as_deref() == Some(template.key.as_str());
                            let select = {
                                let on_select = on_select.clone();
                                let template = template.clone();
                                Callback::from(move |_| on_select.emit(template.clone()))
                            };
                            let classes = if is_selected {
                                "w-full text-left px-4 py-3 bg-emerald-50 text-emerald-800"
                            } else {
                                "w-full text-left px-4 py-3 hover:bg-gray-50 text-gray-900"
                            };
                            html! {
                                <button key={template.key.clone()} onclick={select} class={classes}>
                                    <div class="text-sm font-medium font-mono">{&template.key}</div>
                                    <div class="text-xs text-gray-500 truncate">{&template.subject}</div>
                                </button>
                            }
                        }).collect::<Html>()}
                    </div>

                    <div class="lg:col-span-2">
                        if selected.is_some() {
                            <form onsubmit={on_submit} class="bg-white border border-gray-200 rounded-lg p-4 space-y-3">
                                <div>
                                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Subject"}</label>
                                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full" required=true
                                        value={(*subject).clone()} oninput={on_subject} />
                                </div>
                                <div>
                                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Body"}</label>
                                    <textarea rows="10" class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full font-mono" required=true
                                        value={(*body).clone()} oninput={on_body} />
                                </div>
                                <button type="submit" class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white text-sm font-medium rounded-md">
                                    {"Save template"}
                                </button>
                            </form>
                        } else {
                            <div class="text-sm text-gray-500 p-4">{"Select a template to edit."}</div>
                        }
                    </div>
                </div>
            }
        </div>
    }
}
