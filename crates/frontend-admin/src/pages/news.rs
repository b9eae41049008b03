//! Rider news page

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::shared::{EmptyState, ErrorAlert, PageHeader, StatusBadge};
use crate::services::news::{NewsPost, NewsPostRequest, NewsService};

#[function_component(NewsPage)]
pub fn news_page() -> Html {
    let posts = use_state(Vec::<NewsPost>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let reload = use_state(|| 0u32);

    let title = use_state(String::new);
    let body = use_state(String::new);

    {
        let posts = posts.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            is_loading.set(true);
            spawn_local(async move {
                match NewsService::new().list().await {
                    Ok(list) => {
                        error.set(None);
                        posts.set(list);
                    }
                    Err(err) => error.set(Some(format!("Could not load news: {err}"))),
                }
                is_loading.set(false);
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
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
        let title = title.clone();
        let body = body.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = NewsPostRequest {
                title: (*title).clone(),
                body: (*body).clone(),
            };
            let title = title.clone();
            let body = body.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match NewsService::new().create(&request).await {
                    Ok(_) => {
                        title.set(String::new());
                        body.set(String::new());
                        refresh.emit(());
                    }
                    Err(err) => error.set(Some(format!("Save failed: {err}"))),
                }
            });
        })
    };

    let on_toggle_publish = {
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |(id, publish): (u64, bool)| {
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match NewsService::new().set_published(id, publish).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => error.set(Some(format!("Publish change failed: {err}"))),
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
                match NewsService::new().delete(id).await {
                    Ok(()) => refresh.emit(()),
                    Err(err) => error.set(Some(format!("Delete failed: {err}"))),
                }
            });
        })
    };

    html! {
        <div class="p-6 max-w-4xl mx-auto">
            <PageHeader title="News" subtitle={Some("Rider-facing announcements")} />
            <ErrorAlert message={(*error).clone()} />

            <form onsubmit={on_submit} class="bg-white border border-gray-200 rounded-lg p-4 mb-6 space-y-3">
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Title"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full" required=true
                        value={(*title).clone()} oninput={on_title} />
                </div>
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Body"}</label>
                    <textarea rows="4" class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full" required=true
                        value={(*body).clone()} oninput={on_body} />
                </div>
                <button type="submit" class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white text-sm font-medium rounded-md">
                    {"Create draft"}
                </button>
            </form>

            if *is_loading {
                <p class="text-sm text-gray-500">{"Loading news..."}</p>
            } else if posts.is_empty() {
                <EmptyState title="No announcements" description={"Nothing has been written yet.".to_string()} />
            } else {
                <div class="space-y-3">
                    {posts.iter().map(|post| {
                        let toggle = {
                            let on_toggle_publish = on_toggle_publish.clone();
                            let id = post.id;
                            let publish = !post.is_published;
                            Callback::from(move |_| on_toggle_publish.emit((id, publish)))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = post.id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <div key={post.id} class="bg-white border border-gray-200 rounded-lg p-4">
                                <div class="flex justify-between items-start gap-4">
                                    <div>
                                        <div class="flex items-center gap-2">
                                            <h3 class="font-semibold text-gray-900">{&post.title}</h3>
                                            <StatusBadge active={post.is_published} active_label="Published" inactive_label="Draft" />
                                        </div>
                                        <p class="text-sm text-gray-600 mt-1 whitespace-pre-line">{&post.body}</p>
                                        <p class="text-xs text-gray-400 mt-2">
                                            {post.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                        </p>
                                    </div>
                                    <div class="flex gap-2 text-sm whitespace-nowrap">
                                        <button onclick={toggle} class="text-emerald-700 hover:text-emerald-900">
                                            {if post.is_published { "Unpublish" } else { "Publish" }}
                                        </button>
                                        <button onclick={delete} class="text-red-600 hover:text-red-800">{"Delete"}</button>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect::<Html>()}
                </div>
            }
        </div>
    }
}
