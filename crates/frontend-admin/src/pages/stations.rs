//! Station management page

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::shared::{EmptyState, ErrorAlert, PageHeader, StatusBadge};
use crate::services::line::{Line, LineService};
use crate::services::station::{Station, StationRequest, StationService};

#[function_component(StationsPage)]
pub fn stations_page() -> Html {
    let stations = use_state(Vec::<Station>::new);
    let lines = use_state(Vec::<Line>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let reload = use_state(|| 0u32);

    // Edit mode: Some(id) means the form submits an update for that station.
    let editing = use_state(|| Option::<u64>::None);
    let form = use_state(StationRequest::default);

    {
        let stations = stations.clone();
        let lines = lines.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            is_loading.set(true);
            spawn_local(async move {
                match StationService::new().list().await {
                    Ok(list) => {
                        error.set(None);
                        stations.set(list);
                    }
                    Err(err) => error.set(Some(format!("Could not load stations: {err}"))),
                }
                if let Ok(list) = LineService::new().list().await {
                    lines.set(list);
                }
                is_loading.set(false);
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let on_code = text_input(form.clone(), |form, value| form.code = value);
    let on_name = text_input(form.clone(), |form, value| form.name = value);
    let on_line = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.line_code = select.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let editing = editing.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = (*form).clone();
            let form = form.clone();
            let editing = editing.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let service = StationService::new();
                let result = match *editing {
                    Some(id) => service.update(id, &request).await,
                    None => service.create(&request).await,
                };
                match result {
                    Ok(_) => {
                        form.set(StationRequest::default());
                        editing.set(None);
                        refresh.emit(());
                    }
                    Err(err) => error.set(Some(format!("Save failed: {err}"))),
                }
            });
        })
    };

    let on_edit = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |station: Station| {
            form.set(StationRequest {
                code: station.code.clone(),
                name: station.name.clone(),
                line_code: station.line_code.clone(),
            });
            editing.set(Some(station.id));
        })
    };

    let on_cancel_edit = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            form.set(StationRequest::default());
            editing.set(None);
        })
    };

    let on_toggle = {
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |(id, is_open): (u64, bool)| {
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match StationService::new().set_open(id, is_open).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => error.set(Some(format!("Status change failed: {err}"))),
                }
            });
        })
    };

    let on_delete = {
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: u64| {
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match StationService::new().delete(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => error.set(Some(format!("Delete failed: {err}"))),
                }
            });
        })
    };

    html! {
        <div class="p-6 max-w-5xl mx-auto">
            <PageHeader title="Stations" subtitle={Some("Station registry and service status")} />
            <ErrorAlert message={(*error).clone()} />

            <form onsubmit={on_submit} class="bg-white border border-gray-200 rounded-lg p-4 mb-6 flex flex-wrap items-end gap-3">
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Code"}</label>
                    <input
                        class="px-3 py-2 border border-gray-300 rounded-md text-sm w-24"
                        required=true
                        value={form.code.clone()}
                        oninput={on_code}
                    />
                </div>
                <div class="flex-1 min-w-48">
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Name"}</label>
                    <input
                        class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full"
                        required=true
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Line"}</label>
                    <select
                        class="px-3 py-2 border border-gray-300 rounded-md text-sm"
                        required=true
                        onchange={on_line}
                    >
                        <option value="" selected={form.line_code.is_empty()}>{"Select line"}</option>
                        {lines.iter().map(|line| html! {
                            <option value={line.code.clone()} selected={form.line_code == line.code}>
                                {format!("{} — {}", line.code, line.name)}
                            </option>
                        }).collect::<Html>()}
                    </select>
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white text-sm font-medium rounded-md"
                >
                    {if editing.is_some() { "Save changes" } else { "Add station" }}
                </button>
                if editing.is_some() {
                    <button
                        type="button"
                        onclick={on_cancel_edit}
                        class="px-4 py-2 text-sm text-gray-600 hover:text-gray-900"
                    >
                        {"Cancel"}
                    </button>
                }
            </form>

            if *is_loading {
                <p class="text-sm text-gray-500">{"Loading stations..."}</p>
            } else if stations.is_empty() {
                <EmptyState title="No stations" description={"No stations have been registered yet.".to_string()} />
            } else {
                <div class="bg-white border border-gray-200 rounded-lg overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Code"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Name"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Line"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Status"}</th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {stations.iter().map(|station| {
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let station = station.clone();
                                    Callback::from(move |_| on_edit.emit(station.clone()))
                                };
                                let toggle = {
                                    let on_toggle = on_toggle.clone();
                                    let id = station.id;
                                    let is_open = station.is_open;
                                    Callback::from(move |_| on_toggle.emit((id, !is_open)))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = station.id;
                                    Callback::from(move |_| on_delete.emit(id))
                                };
                                html! {
                                    <tr key={station.id}>
                                        <td class="px-4 py-3 text-sm font-mono text-gray-900">{&station.code}</td>
                                        <td class="px-4 py-3 text-sm text-gray-900">{&station.name}</td>
                                        <td class="px-4 py-3 text-sm text-gray-500">{&station.line_code}</td>
                                        <td class="px-4 py-3">
                                            <StatusBadge active={station.is_open} active_label="Open" inactive_label="Closed" />
                                        </td>
                                        <td class="px-4 py-3 text-right text-sm space-x-2 whitespace-nowrap">
                                            <button onclick={edit} class="text-emerald-700 hover:text-emerald-900">{"Edit"}</button>
                                            <button onclick={toggle} class="text-amber-600 hover:text-amber-800">
                                                {if station.is_open { "Close" } else { "Open" }}
                                            </button>
                                            <button onclick={delete} class="text-red-600 hover:text-red-800">{"Delete"}</button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()}
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}

fn text_input(
    form: UseStateHandle<StationRequest>,
    apply: fn(&mut StationRequest, String),
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}
