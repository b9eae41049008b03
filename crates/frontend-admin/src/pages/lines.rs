//! Line management page

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::shared::{EmptyState, ErrorAlert, PageHeader};
use crate::services::line::{Line, LineRequest, LineService};

#[function_component(LinesPage)]
pub fn lines_page() -> Html {
    let lines = use_state(Vec::<Line>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let reload = use_state(|| 0u32);

    let editing = use_state(|| Option::<u64>::None);
    let form = use_state(|| LineRequest {
        color: "#2f855a".to_string(),
        ..LineRequest::default()
    });

    {
        let lines = lines.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            is_loading.set(true);
            spawn_local(async move {
                match LineService::new().list().await {
                    Ok(list) => {
                        error.set(None);
                        lines.set(list);
                    }
                    Err(err) => error.set(Some(format!("Could not load lines: {err}"))),
                }
                is_loading.set(false);
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let field = |apply: fn(&mut LineRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
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
                let service = LineService::new();
                let result = match *editing {
                    Some(id) => service.update(id, &request).await,
                    None => service.create(&request).await,
                };
                match result {
                    Ok(_) => {
                        form.set(LineRequest {
                            color: "#2f855a".to_string(),
                            ..LineRequest::default()
                        });
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
        Callback::from(move |line: Line| {
            form.set(LineRequest {
                code: line.code.clone(),
                name: line.name.clone(),
                color: line.color.clone(),
                first_terminus: line.first_terminus.clone(),
                last_terminus: line.last_terminus.clone(),
            });
            editing.set(Some(line.id));
        })
    };

    let on_delete = {
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: u64| {
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match LineService::new().delete(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => error.set(Some(format!("Delete failed: {err}"))),
                }
            });
        })
    };

    html! {
        <div class="p-6 max-w-5xl mx-auto">
            <PageHeader title="Lines" subtitle={Some("Line registry and termini")} />
            <ErrorAlert message={(*error).clone()} />

            <form onsubmit={on_submit} class="bg-white border border-gray-200 rounded-lg p-4 mb-6 flex flex-wrap items-end gap-3">
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Code"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-20" required=true
                        value={form.code.clone()} oninput={field(|f, v| f.code = v)} />
                </div>
                <div class="flex-1 min-w-40">
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Name"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full" required=true
                        value={form.name.clone()} oninput={field(|f, v| f.name = v)} />
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Color"}</label>
                    <input type="color" class="h-9 w-12 border border-gray-300 rounded-md"
                        value={form.color.clone()} oninput={field(|f, v| f.color = v)} />
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"First terminus"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm" required=true
                        value={form.first_terminus.clone()} oninput={field(|f, v| f.first_terminus = v)} />
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Last terminus"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm" required=true
                        value={form.last_terminus.clone()} oninput={field(|f, v| f.last_terminus = v)} />
                </div>
                <button type="submit" class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white text-sm font-medium rounded-md">
                    {if editing.is_some() { "Save changes" } else { "Add line" }}
                </button>
            </form>

            if *is_loading {
                <p class="text-sm text-gray-500">{"Loading lines..."}</p>
            } else if lines.is_empty() {
                <EmptyState title="No lines" description={"No lines have been registered yet.".to_string()} />
            } else {
                <div class="bg-white border border-gray-200 rounded-lg overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Line"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Route"}</th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {lines.iter().map(|line| {
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let line = line.clone();
                                    Callback::from(move |_| on_edit.emit(line.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = line.id;
                                    Callback::from(move |_| on_delete.emit(id))
                                };
                                html! {
                                    <tr key={line.id}>
                                        <td class="px-4 py-3">
                                            <div class="flex items-center gap-2">
                                                <span class="w-3 h-3 rounded-full inline-block" style={format!("background-color: {}", line.color)}></span>
                                                <span class="text-sm font-mono text-gray-900">{&line.code}</span>
                                                <span class="text-sm text-gray-900">{&line.name}</span>
                                            </div>
                                        </td>
                                        <td class="px-4 py-3 text-sm text-gray-500">
                                            {format!("{} — {}", line.first_terminus, line.last_terminus)}
                                        </td>
                                        <td class="px-4 py-3 text-right text-sm space-x-2 whitespace-nowrap">
                                            <button onclick={edit} class="text-emerald-700 hover:text-emerald-900">{"Edit"}</button>
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
