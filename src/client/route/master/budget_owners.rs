use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            ConfirmationModal, ErrorPage, LoadingPage, Modal, Page, Pagination, SearchInput,
        },
        constant::{DEFAULT_PAGE_SIZE, SITE_NAME},
        model::error::ApiError,
        store::user::UserState,
    },
    model::{
        api::{PaginatedDto, Status},
        budget_owner::{BudgetOwnerDto, CreateBudgetOwnerDto, UpdateBudgetOwnerDto},
    },
};

use super::status_badge;

#[cfg(feature = "web")]
use crate::client::api::budget_owner::{
    create_budget_owner, delete_budget_owner, get_budget_owners, update_budget_owner,
};

#[component]
pub fn BudgetOwners() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let is_admin = user_state.read().is_admin();

    let page = use_signal(|| 1u64);
    let per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let search = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);

    let mut owners = use_signal(|| None::<Result<PaginatedDto<BudgetOwnerDto>, ApiError>>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<BudgetOwnerDto>);

    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_budget_owners(page(), per_page(), Some(search())).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*fetch_future.read_unchecked() {
        Some(Ok(data)) => owners.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch budget owners: {}", err);
            owners.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "Budget Owners | {SITE_NAME}" }
        match owners() {
            Some(Ok(data)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex flex-wrap items-center justify-between gap-4",
                            h1 { class: "text-lg sm:text-2xl", "Budget Owners" }
                            if is_admin {
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| {
                                        editing.set(None);
                                        show_form.set(true);
                                    },
                                    "New Budget Owner"
                                }
                            }
                        }
                        SearchInput {
                            query: search,
                            page,
                            placeholder: "Search by name or code...".to_string(),
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                OwnerTable {
                                    owners: data.items,
                                    is_admin,
                                    on_edit: move |owner: BudgetOwnerDto| {
                                        editing.set(Some(owner));
                                        show_form.set(true);
                                    },
                                    refetch_trigger,
                                }
                                Pagination { page, per_page, meta: data.meta }
                            }
                        }
                    }
                }
                OwnerFormModal { show: show_form, editing: editing(), refetch_trigger }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            None => rsx! {
                LoadingPage {}
            },
        }
    }
}

#[component]
fn OwnerTable(
    owners: Vec<BudgetOwnerDto>,
    is_admin: bool,
    on_edit: EventHandler<BudgetOwnerDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut owner_to_delete = use_signal(|| None::<BudgetOwnerDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let id = owner_to_delete.peek().as_ref().map(|o| o.id)?;
        Some(delete_budget_owner(id).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to delete budget owner: {}", err);
                    delete_error.set(Some(err.message.clone()));
                }
            }
            is_deleting.set(false);
        }
    });

    rsx! {
        if owners.is_empty() {
            div { class: "text-center py-8 opacity-50", "No budget owners found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Code" }
                            th { "Description" }
                            th { "Status" }
                            if is_admin {
                                th { class: "text-right", "Actions" }
                            }
                        }
                    }
                    tbody {
                        for owner in owners {
                            {
                                let edit_target = owner.clone();
                                let delete_target = owner.clone();
                                let code = owner.code.clone().unwrap_or_else(|| "-".to_string());
                                let description = owner.description.clone().unwrap_or_default();
                                rsx! {
                                    tr {
                                        key: "{owner.id}",
                                        td { "{owner.name}" }
                                        td { "{code}" }
                                        td { class: "opacity-70", "{description}" }
                                        td { span { class: status_badge(owner.status), "{owner.status}" } }
                                        if is_admin {
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm",
                                                        onclick: move |_| on_edit.call(edit_target.clone()),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            delete_error.set(None);
                                                            owner_to_delete.set(Some(delete_target.clone()));
                                                            show_delete_modal.set(true);
                                                        },
                                                        "Delete"
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
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Budget Owner".to_string(),
            message: rsx!(
                if let Some(owner) = owner_to_delete() {
                    p {
                        class: "py-4",
                        "Delete "
                        span { class: "font-bold", "\"{owner.name}\"" }
                        "? Its budgets and transactions are deleted with it."
                    }
                }
            ),
            error: delete_error(),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            on_confirm: move |_| {
                is_deleting.set(true);
            },
        }
    }
}

#[component]
fn OwnerFormModal(
    mut show: Signal<bool>,
    editing: Option<BudgetOwnerDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut active = use_signal(|| true);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let editing_id = editing.as_ref().map(|o| o.id);

    // Reset form when modal opens
    use_effect(use_reactive!(|editing| {
        if show() {
            name.set(editing.as_ref().map(|o| o.name.clone()).unwrap_or_default());
            code.set(editing.as_ref().and_then(|o| o.code.clone()).unwrap_or_default());
            description.set(
                editing
                    .as_ref()
                    .and_then(|o| o.description.clone())
                    .unwrap_or_default(),
            );
            active.set(editing.as_ref().is_none_or(|o| o.status == Status::Active));
            error_message.set(None);
            should_submit.set(false);
        }
    }));

    #[cfg(feature = "web")]
    let submit_future = use_resource(move || async move {
        if !should_submit() {
            return None;
        }

        let status = if *active.peek() {
            Status::Active
        } else {
            Status::Inactive
        };

        let result = match editing_id {
            Some(id) => {
                update_budget_owner(
                    id,
                    UpdateBudgetOwnerDto {
                        name: Some(name.peek().clone()),
                        code: Some(code.peek().clone()),
                        description: Some(description.peek().clone()),
                        status: Some(status),
                    },
                )
                .await
            }
            None => {
                create_budget_owner(CreateBudgetOwnerDto {
                    name: name.peek().clone(),
                    code: Some(code.peek().clone()),
                    description: Some(description.peek().clone()),
                    status: Some(status),
                })
                .await
            }
        };
        Some(result)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = submit_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to save budget owner: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error_message.set(Some("Name is required".to_string()));
            return;
        }

        error_message.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let title = if editing_id.is_some() {
        "Edit Budget Owner"
    } else {
        "New Budget Owner"
    };

    rsx! {
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                label {
                    class: "form-control flex flex-col gap-1",
                    span { class: "label-text", "Name" }
                    input {
                        class: "input input-bordered w-full",
                        value: "{name()}",
                        disabled: is_submitting,
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                label {
                    class: "form-control flex flex-col gap-1",
                    span { class: "label-text", "Code (optional)" }
                    input {
                        class: "input input-bordered w-full",
                        value: "{code()}",
                        disabled: is_submitting,
                        oninput: move |evt| code.set(evt.value()),
                    }
                }
                label {
                    class: "form-control flex flex-col gap-1",
                    span { class: "label-text", "Description (optional)" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        value: "{description()}",
                        disabled: is_submitting,
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-success",
                        checked: active(),
                        disabled: is_submitting,
                        onchange: move |evt| active.set(evt.checked()),
                    }
                    span { class: "label-text", "Active" }
                }
                if let Some(err) = error_message() {
                    div { class: "alert alert-error", span { "{err}" } }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting,
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting,
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Saving..."
                        } else {
                            "Save"
                        }
                    }
                }
            }
        }
    }
}
