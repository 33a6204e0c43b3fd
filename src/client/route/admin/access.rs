use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::component::Modal,
    model::{budget_owner::BudgetOwnerDto, user::UserDto},
};

#[cfg(feature = "web")]
use crate::client::api::{
    budget_owner::get_all_budget_owners,
    user::{get_user_access, grant_user_access, revoke_user_access},
};

/// Pending change to a user's budget owner access.
#[derive(Clone, Copy, PartialEq)]
enum AccessChange {
    Grant(i32),
    Revoke(i32),
}

/// Lists and edits which budget owners a regular user can see.
#[component]
pub fn AccessModal(show: Signal<bool>, user: UserDto) -> Element {
    let user_id = user.id;

    let mut granted = use_signal(|| None::<Vec<BudgetOwnerDto>>);
    let mut all_owners = use_signal(Vec::<BudgetOwnerDto>::new);
    let mut selected = use_signal(String::new);
    let mut pending = use_signal(|| None::<AccessChange>);
    let mut error_message = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let fetch_future = use_resource(use_reactive!(|user_id| async move {
        if !show() {
            return None;
        }
        // Refetch once a pending change has finished
        if pending().is_some() {
            return None;
        }
        let access = get_user_access(user_id).await;
        let owners = get_all_budget_owners().await;
        Some((access, owners))
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some((access, owners))) = fetch_future.read_unchecked().as_ref() {
            match access {
                Ok(list) => granted.set(Some(list.clone())),
                Err(err) => {
                    tracing::error!("Failed to fetch user access: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            match owners {
                Ok(list) => all_owners.set(list.clone()),
                Err(err) => tracing::error!("Failed to fetch budget owners: {}", err),
            }
        }
    });

    #[cfg(feature = "web")]
    let change_future = use_resource(use_reactive!(|user_id| async move {
        let change = pending()?;
        let result = match change {
            AccessChange::Grant(owner_id) => grant_user_access(user_id, owner_id).await.map(|_| ()),
            AccessChange::Revoke(owner_id) => revoke_user_access(user_id, owner_id).await,
        };
        Some(result)
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = change_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    selected.set(String::new());
                    error_message.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to change user access: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            pending.set(None);
        }
    });

    let granted_list = granted().unwrap_or_default();
    let available: Vec<BudgetOwnerDto> = all_owners()
        .into_iter()
        .filter(|owner| !granted_list.iter().any(|g| g.id == owner.id))
        .collect();
    let is_busy = pending().is_some();

    rsx! {
        Modal {
            show,
            title: format!("Access for {}", user.name),
            prevent_close: is_busy,
            div {
                class: "flex flex-col gap-4",
                form {
                    class: "flex gap-2",
                    onsubmit: move |evt: Event<FormData>| {
                        evt.prevent_default();
                        if let Ok(owner_id) = selected().parse::<i32>() {
                            pending.set(Some(AccessChange::Grant(owner_id)));
                        }
                    },
                    select {
                        class: "select select-bordered flex-1",
                        value: "{selected()}",
                        disabled: is_busy,
                        onchange: move |evt| selected.set(evt.value()),
                        option { value: "", disabled: true, "Select a budget owner" }
                        for owner in available {
                            option { key: "{owner.id}", value: "{owner.id}", "{owner.name}" }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_busy || selected().is_empty(),
                        "Grant"
                    }
                }
                if let Some(err) = error_message() {
                    div { class: "alert alert-error", span { "{err}" } }
                }
                if granted().is_none() {
                    div {
                        class: "flex justify-center py-4",
                        span { class: "loading loading-spinner" }
                    }
                } else if granted_list.is_empty() {
                    p { class: "text-center py-4 opacity-50", "No budget owners granted yet" }
                } else {
                    ul {
                        class: "flex flex-col gap-2",
                        for owner in granted_list {
                            {
                                let owner_id = owner.id;
                                rsx! {
                                    li {
                                        key: "{owner.id}",
                                        class: "flex items-center justify-between gap-2",
                                        span { "{owner.name}" }
                                        button {
                                            class: "btn btn-sm btn-error btn-outline",
                                            disabled: is_busy,
                                            onclick: move |_| pending.set(Some(AccessChange::Revoke(owner_id))),
                                            "Revoke"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
