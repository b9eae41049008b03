//! Role administration page

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::shared::{EmptyState, ErrorAlert, PageHeader};
use crate::services::role::{Role, RolePermission, RoleRequest, RoleService};

#[function_component(RolesPage)]
pub fn roles_page() -> Html {
    let roles = use_state(Vec::<Role>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let reload = use_state(|| 0u32);

    let name = use_state(String::new);
    let description = use_state(String::new);

    // Role whose permissions are expanded, with the loaded permissions.
    let expanded = use_state(|| Option::<u64>::None);
    let permissions = use_state(Vec::<RolePermission>::new);
    let perm_action = use_state(String::new);
    let perm_object = use_state(String::new);

    {
        let roles = roles.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            is_loading.set(true);
            spawn_local(async move {
                match RoleService::new().list().await {
                    Ok(list) => {
                        error.set(None);
                        roles.set(list);
                    }
                    Err(err) => error.set(Some(format!("Could not load roles: {err}"))),
                }
                is_loading.set(false);
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: ()| reload.set(*reload + 1))
    };

    let load_permissions = {
        let permissions = permissions.clone();
        let error = error.clone();
        Callback::from(move |role_id: u64| {
            let permissions = permissions.clone();
            let error = error.clone();
            spawn_local(async move {
                match RoleService::new().permissions(role_id).await {
                    Ok(list) => permissions.set(list),
                    Err(err) => error.set(Some(format!("Could not load permissions: {err}"))),
                }
            });
        })
    };

    let input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let description = description.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = RoleRequest {
                name: (*name).clone(),
                description: (*description).clone(),
            };
            let name = name.clone();
            let description = description.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match RoleService::new().create(&request).await {
                    Ok(_) => {
                        name.set(String::new());
                        description.set(String::new());
                        refresh.emit(());
                    }
                    Err(err) => error.set(Some(format!("Save failed: {err}"))),
                }
            });
        })
    };

    let on_toggle_expand = {
        let expanded = expanded.clone();
        let permissions = permissions.clone();
        let load_permissions = load_permissions.clone();
        Callback::from(move |role_id: u64| {
            if *expanded == Some(role_id) {
                expanded.set(None);
                permissions.set(Vec::new());
            } else {
                expanded.set(Some(role_id));
                permissions.set(Vec::new());
                load_permissions.emit(role_id);
            }
        })
    };

    let on_delete = {
        let error = error.clone();
        let refresh = refresh.clone();
        let expanded = expanded.clone();
        Callback::from(move |id: u64| {
            let error = error.clone();
            let refresh = refresh.clone();
            let expanded = expanded.clone();
            spawn_local(async move {
                match RoleService::new().delete(id).await {
                    Ok(()) => {
                        expanded.set(None);
                        refresh.emit(());
                    }
                    Err(err) => error.set(Some(format!("Delete failed: {err}"))),
                }
            });
        })
    };

    let on_grant = {
        let expanded = expanded.clone();
        let perm_action = perm_action.clone();
        let perm_object = perm_object.clone();
        let error = error.clone();
        let load_permissions = load_permissions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(role_id) = *expanded else {
                return;
            };
            let permission = RolePermission {
                action: (*perm_action).clone(),
                object: (*perm_object).clone(),
            };
            let perm_action = perm_action.clone();
            let perm_object = perm_object.clone();
            let error = error.clone();
            let load_permissions = load_permissions.clone();
            spawn_local(async move {
                match RoleService::new().grant_permission(role_id, &permission).await {
                    Ok(()) => {
                        perm_action.set(String::new());
                        perm_object.set(String::new());
                        load_permissions.emit(role_id);
                    }
                    Err(err) => error.set(Some(format!("Grant failed: {err}"))),
                }
            });
        })
    };

    let on_revoke = {
        let expanded = expanded.clone();
        let error = error.clone();
        let load_permissions = load_permissions.clone();
        Callback::from(move |permission: RolePermission| {
            let Some(role_id) = *expanded else {
                return;
            };
            let error = error.clone();
            let load_permissions = load_permissions.clone();
            spawn_local(async move {
                match RoleService::new()
                    .revoke_permission(role_id, &permission)
                    .await
                {
                    Ok(()) => load_permissions.emit(role_id),
                    Err(err) => error.set(Some(format!("Revoke failed: {err}"))),
                }
            });
        })
    };

    html! {
        <div class="p-6 max-w-4xl mx-auto">
            <PageHeader title="Roles" subtitle={Some("Staff roles and their permissions")} />
            <ErrorAlert message={(*error).clone()} />

            <form onsubmit={on_submit} class="bg-white border border-gray-200 rounded-lg p-4 mb-6 flex flex-wrap items-end gap-3">
                <div>
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Name"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-40" required=true
                        value={(*name).clone()} oninput={input(name.clone())} />
                </div>
                <div class="flex-1 min-w-48">
                    <label class="block text-xs font-medium text-gray-500 mb-1">{"Description"}</label>
                    <input class="px-3 py-2 border border-gray-300 rounded-md text-sm w-full"
                        value={(*description).clone()} oninput={input(description.clone())} />
                </div>
                <button type="submit" class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white text-sm font-medium rounded-md">
                    {"Add role"}
                </button>
            </form>

            if *is_loading {
                <p class="text-sm text-gray-500">{"Loading roles..."}</p>
            } else if roles.is_empty() {
                <EmptyState title="No roles" description={"No roles have been created yet.".to_string()} />
            } else {
                <div class="space-y-3">
                    {roles.iter().map(|role| {
                        let is_expanded = *expanded == Some(role.id);
                        let toggle = {
                            let on_toggle_expand = on_toggle_expand.clone();
                            let id = role.id;
                            Callback::from(move |_| on_toggle_expand.emit(id))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = role.id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <div key={role.id} class="bg-white border border-gray-200 rounded-lg">
                                <div class="p-4 flex justify-between items-center">
                                    <div>
                                        <h3 class="font-semibold text-gray-900">{&role.name}</h3>
                                        <p class="text-sm text-gray-500">{&role.description}</p>
                                    </div>
                                    <div class="flex items-center gap-3 text-sm whitespace-nowrap">
                                        <span class="text-xs text-gray-400">
                                            {format!("{} member{}", role.member_count, if role.member_count == 1 { "" } else { "s" })}
                                        </span>
                                        <button onclick={toggle} class="text-emerald-700 hover:text-emerald-900">
                                            {if is_expanded { "Hide permissions" } else { "Permissions" }}
                                        </button>
                                        <button onclick={delete} class="text-red-600 hover:text-red-800">{"Delete"}</button>
                                    </div>
                                </div>
                                if is_expanded {
                                    <div class="border-t border-gray-200 p-4 bg-gray-50 rounded-b-lg">
                                        if permissions.is_empty() {
                                            <p class="text-sm text-gray-500 mb-3">{"No permissions granted."}</p>
                                        } else {
                                            <ul class="mb-3 space-y-1">
                                                {permissions.iter().map(|permission| {
                                                    let revoke = {
                                                        let on_revoke = on_revoke.clone();
                                                        let permission = permission.clone();
                                                        Callback::from(move |_| on_revoke.emit(permission.clone()))
                                                    };
                                                    html! {
                                                        <li class="flex items-center justify-between text-sm">
                                                            <code class="text-gray-700">
                                                                {format!("{}:{}", permission.action, permission.object)}
                                                            </code>
                                                            <button onclick={revoke} class="text-red-600 hover:text-red-800 text-xs">
                                                                {"Revoke"}
                                                            </button>
                                                        </li>
                                                    }
                                                }).collect::<Html>()}
                                            </ul>
                                        }
                                        <form onsubmit={on_grant.clone()} class="flex items-end gap-2">
                                            <div>
                                                <label class="block text-xs font-medium text-gray-500 mb-1">{"Action"}</label>
                                                <input class="px-2 py-1.5 border border-gray-300 rounded-md text-sm w-32" required=true
                                                    placeholder="manage"
                                                    value={(*perm_action).clone()} oninput={input(perm_action.clone())} />
                                            </div>
                                            <div>
                                                <label class="block text-xs font-medium text-gray-500 mb-1">{"Object"}</label>
                                                <input class="px-2 py-1.5 border border-gray-300 rounded-md text-sm w-32" required=true
                                                    placeholder="stations"
                                                    value={(*perm_object).clone()} oninput={input(perm_object.clone())} />
                                            </div>
                                            <button type="submit" class="px-3 py-1.5 bg-emerald-600 hover:bg-emerald-700 text-white text-sm rounded-md">
                                                {"Grant"}
                                            </button>
                                        </form>
                                    </div>
                                }
                            </div>
                        }
                    }).collect::<Html>()}
                </div>
            }
        </div>
    }
}
