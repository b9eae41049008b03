//! Staff shift scheduling page

use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::shared::{EmptyState, ErrorAlert, PageHeader};
use crate::services::shift::{Shift, ShiftKind, ShiftRequest, ShiftService};
use crate::services::station::{Station, StationService};

#[function_component(ShiftsPage)]
pub fn shifts_page() -> Html {
    let shifts = use_state(Vec::<Shift>::new);
    let stations = use_state(Vec::<Station>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let reload = use_state(|| 0u32);

    let staff_name = use_state(String::new);
    let station_code = use_state(String::new);
    let date = use_state(String::new);
    let kind = use_state(|| ShiftKind::Morning);

    {
        let shifts = shifts.clone();
        let stations = stations.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            is_loading.set(true);
            spawn_local(async move {
                match ShiftService::new().list().await {
                    Ok(list) => {
                        error.set(None);
                        shifts.set(list);
                    }
                    Err(err) => error.set(Some(format!("Could not load shifts: {err}"))),
                }
                if let Ok(list) = StationService::new().list().await {
                    stations.set(list);
                }
                is_loading.set(false);
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let on_staff = {
        let staff_name = staff_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            staff_name.set(input.value());
        })
    };
    let on_date = {
        let date = date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };
    let on_station = {
        let station_code = station_code.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            station_code.set(select.value());
        })
    };
    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let next = match select.value().as_str() {
                "Evening" => ShiftKind::Evening,
                "Night" => ShiftKind::Night,
                _ => ShiftKind::Morning,
            };
            kind.set(next);
        })
    };

    let on_submit = {
        let staff_name = staff_name.clone();
        let station_code = station_code.clone();
        let date = date.clone();
        let kind = kind.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(parsed_date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
                error.set(Some("Pick a date for the shift.".into()));
                return;
            };
            let request = ShiftRequest {
                staff_name: (*staff_name).clone(),
                station_code: (*station_code).clone(),
                date: parsed_date,
                kind: *kind,
            };

            let staff_name = staff_name.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match ShiftService::new().create(&request).await {
                    Ok(_) => {
                        staff_name.set(String::new());
                        refresh.emit(());
                    }
                    Err(err) => error.set(Some(format!("Save failed: {err}"))),
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
                match ShiftService::new().delete(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => error.set(Some(format!("Delete failed: {err}"))),
                }
            });
        })
    };

    html! {
        <div class="p-6 max-w-5xl mx-auto">
            <PageHeader title="Shifts" subtitle={Some("Station staffing schedule")} />
            <ErrorAlert message={(*error).clone()} />

            <form onsubmit={on_submit} class="bg-white border border-gray-200 rounded-lg p-4 mb-6 flex flex-wrap items-end gap-3">
                <div class="flex-1 min-w-44">
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Staff member"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full" required=true
                        value={(*staff_name).clone()} oninput={on_staff} />
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Station"}</label>
                    <select class="px-3 py-2 border border-gray-300 rounded-md text-sm" required=true onchange={on_station}>
                        <option value="" selected={station_code.is_empty()}>{"Select station"}</option>
                        {stations.iter().map(|station| html! {
                            <option value={station.code.clone()} selected={*station_code == station.code}>
                                {format!("{} — {}", station.code, station.name)}
                            </option>
                        }).collect::<Html>()}
                    </select>
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Date"}</label>
                    <input type="date" class="px-3 py-2 border border-gray-300 rounded-md text-sm" required=true
                        value={(*date).clone()} oninput={on_date} />
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Shift"}</label>
                    <select class="px-3 py-2 border border-gray-300 rounded-md text-sm" onchange={on_kind}>
                        {ShiftKind::ALL.iter().map(|k| html! {
                            <option value={k.label()} selected={*kind == *k}>{k.label()}</option>
                        }).collect::<Html>()}
                    </select>
                </div>
                <button type="submit" class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white text-sm font-medium rounded-md">
                    {"Schedule shift"}
                </button>
            </form>

            if *is_loading {
                <p class="text-sm text-gray-500">{"Loading shifts..."}</p>
            } else if shifts.is_empty() {
                <EmptyState title="No shifts" description={"Nothing is scheduled yet.".to_string()} />
            } else {
                <div class="bg-white border border-gray-200 rounded-lg overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Date"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Shift"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Station"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Staff"}</th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {shifts.iter().map(|shift| {
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = shift.id;
                                    Callback::from(move |_| on_delete.emit(id))
                                };
                                html! {
                                    <tr key={shift.id}>
                                        <td class="px-4 py-3 text-sm text-gray-900">{shift.date.format("%Y-%m-%d").to_string()}</td>
                                        <td class="px-4 py-3 text-sm text-gray-500">{shift.kind.label()}</td>
                                        <td class="px-4 py-3 text-sm text-gray-500 font-mono">{&shift.station_code}</td>
                                        <td class="px-4 py-3 text-sm text-gray-900">{&shift.staff_name}</td>
                                        <td class="px-4 py-3 text-right text-sm">
                                            <button onclick={delete} class="text-red-600 hover:text-red-800">{"Remove"}</button>
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
