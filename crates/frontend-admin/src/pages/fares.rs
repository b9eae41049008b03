//! Fare product page

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::shared::{EmptyState, ErrorAlert, PageHeader, StatusBadge};
use crate::services::fare::{FareProduct, FareProductRequest, FareService};

fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[function_component(FaresPage)]
pub fn fares_page() -> Html {
    let fares = use_state(Vec::<FareProduct>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let reload = use_state(|| 0u32);

    let name = use_state(String::new);
    let price = use_state(String::new);
    let valid_days = use_state(|| "1".to_string());

    // Price being edited inline, per product id.
    let price_edit = use_state(|| Option::<(u64, String)>::None);

    {
        let fares = fares.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            is_loading.set(true);
            spawn_local(async move {
                match FareService::new().list().await {
                    Ok(list) => {
                        error.set(None);
                        fares.set(list);
                    }
                    Err(err) => error.set(Some(format!("Could not load fare products: {err}"))),
                }
                is_loading.set(false);
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let price = price.clone();
        let valid_days = valid_days.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(price_value) = price.parse::<f64>() else {
                error.set(Some("Price must be a number.".into()));
                return;
            };
            let Ok(days) = valid_days.parse::<u32>() else {
                error.set(Some("Validity must be a whole number of days.".into()));
                return;
            };
            let request = FareProductRequest {
                name: (*name).clone(),
                price_cents: (price_value * 100.0).round() as u64,
                valid_days: days,
            };

            let name = name.clone();
            let price = price.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match FareService::new().create(&request).await {
                    Ok(_) => {
                        name.set(String::new());
                        price.set(String::new());
                        refresh.emit(());
                    }
                    Err(err) => error.set(Some(format!("Save failed: {err}"))),
                }
            });
        })
    };

    let on_save_price = {
        let price_edit = price_edit.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            let Some((id, raw)) = (*price_edit).clone() else {
                return;
            };
            let Ok(price_value) = raw.parse::<f64>() else {
                error.set(Some("Price must be a number.".into()));
                return;
            };
            let price_edit = price_edit.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match FareService::new()
                    .set_price(id, (price_value * 100.0).round() as u64)
                    .await
                {
                    Ok(_) => {
                        price_edit.set(None);
                        refresh.emit(());
                    }
                    Err(err) => error.set(Some(format!("Price change failed: {err}"))),
                }
            });
        })
    };

    let on_retire = {
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: u64| {
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match FareService::new().retire(id).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => error.set(Some(format!("Retire failed: {err}"))),
                }
            });
        })
    };

    html! {
        <div class="p-6 max-w-5xl mx-auto">
            <PageHeader title="Fare products" subtitle={Some("Ticket types sold to riders")} />
            <ErrorAlert message={(*error).clone()} />

            <form onsubmit={on_submit} class="bg-white border border-gray-200 rounded-lg p-4 mb-6 flex flex-wrap items-end gap-3">
                <div class="flex-1 min-w-48">
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Name"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full" required=true
                        placeholder="e.g. 7-day pass"
                        value={(*name).clone()} oninput={input(name.clone())} />
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Price"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-28" required=true
                        inputmode="decimal" placeholder="2.50"
                        value={(*price).clone()} oninput={input(price.clone())} />
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Valid days"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-24" required=true
                        inputmode="numeric"
                        value={(*valid_days).clone()} oninput={input(valid_days.clone())} />
                </div>
                <button type="submit" class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white text-sm font-medium rounded-md">
                    {"Add product"}
                </button>
            </form>

            if *is_loading {
                <p class="text-sm text-gray-500">{"Loading fare products..."}</p>
            } else if fares.is_empty() {
                <EmptyState title="No fare products" description={"No fare products are on sale yet.".to_string()} />
            } else {
                <div class="bg-white border border-gray-200 rounded-lg overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Product"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Price"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Validity"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Status"}</th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {fares.iter().map(|fare| {
                                let is_editing = matches!(*price_edit, Some((id, _)) if id == fare.id);
                                let start_edit = {
                                    let price_edit = price_edit.clone();
                                    let id = fare.id;
                                    let current = format_price(fare.price_cents);
                                    Callback::from(move |_| price_edit.set(Some((id, current.clone()))))
                                };
                                let edit_input = {
                                    let price_edit = price_edit.clone();
                                    let id = fare.id;
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        price_edit.set(Some((id, input.value())));
                                    })
                                };
                                let retire = {
                                    let on_retire = on_retire.clone();
                                    let id = fare.id;
                                    Callback::from(move |_| on_retire.emit(id))
                                };
                                html! {
                                    <tr key={fare.id}>
                                        <td class="px-4 py-3 text-sm text-gray-900">{&fare.name}</td>
                                        <td class="px-4 py-3 text-sm text-gray-900">
                                            if is_editing {
                                                <span class="inline-flex items-center gap-2">
                                                    <input class="px-2 py-1 border border-gray-300 rounded-md text-sm w-24"
                                                        value={(*price_edit).clone().map(|(_, v)| v).unwrap_or_default()}
                                                        oninput={edit_input} />
                                                    <button onclick={on_save_price.clone()} class="text-emerald-700 hover:text-emerald-900 text-sm">{"Save"}</button>
                                                </span>
                                            } else {
                                                {format_price(fare.price_cents)}
                                            }
                                        </td>
                                        <td class="px-4 py-3 text-sm text-gray-500">
                                            {format!("{} day{}", fare.valid_days, if fare.valid_days == 1 { "" } else { "s" })}
                                        </td>
                                        <td class="px-4 py-3">
                                            <StatusBadge active={fare.is_active} active_label="On sale" inactive_label="Retired" />
                                        </td>
                                        <td class="px-4 py-3 text-right text-sm space-x-2 whitespace-nowrap">
                                            if fare.is_active {
                                                <button onclick={start_edit} class="text-emerald-700 hover:text-emerald-900">{"Change price"}</button>
                                                <button onclick={retire} class="text-red-600 hover:text-red-800">{"Retire"}</button>
                                            }
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
