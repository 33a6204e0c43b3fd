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
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
};

use super::status_badge;

#[cfg(feature = "web")]
use crate::client::api::category::{
    create_category, delete_category, get_categories, update_category,
};

#[component]
pub fn Categories() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let is_admin = user_state.read().is_admin();

    let page = use_signal(|| 1u64);
    let per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let search = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);

    let mut categories = use_signal(|| None::<Result<PaginatedDto<CategoryDto>, ApiError>>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<CategoryDto>);

    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_categories(page(), per_page(), Some(search())).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*fetch_future.read_unchecked() {
        Some(Ok(data)) => categories.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch categories: {}", err);
            categories.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "Categories | {SITE_NAME}" }
        match categories() {
            Some(Ok(data)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex flex-wrap items-center justify-between gap-4",
                            h1 { class: "text-lg sm:text-2xl", "Categories" }
                            if is_admin {
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| {
                                        editing.set(None);
                                        show_form.set(true);
                                    },
                                    "New Category"
                                }
                            }
                        }
                        SearchInput {
                            query: search,
                            page,
                            placeholder: "Search by name...".to_string(),
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                CategoryTable {
                                    categories: data.items,
                                    is_admin,
                                    on_edit: move |category: CategoryDto| {
                                        editing.set(Some(category));
                                        show_form.set(true);
                                    },
                                    refetch_trigger,
                                }
                                Pagination { page, per_page, meta: data.meta }
                            }
                        }
                    }
                }
                CategoryFormModal { show: show_form, editing: editing(), refetch_trigger }
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
fn CategoryTable(
    categories: Vec<CategoryDto>,
    is_admin: bool,
    on_edit: EventHandler<CategoryDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut category_to_delete = use_signal(|| None::<CategoryDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let id = category_to_delete.peek().as_ref().map(|c| c.id)?;
        Some(delete_category(id).await)
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
                    tracing::error!("Failed to delete category: {}", err);
                    delete_error.set(Some(err.message.clone()));
                }
            }
            is_deleting.set(false);
        }
    });

    rsx! {
        if categories.is_empty() {
            div { class: "text-center py-8 opacity-50", "No categories found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Description" }
                            th { "Status" }
                            if is_admin {
                                th { class: "text-right", "Actions" }
                            }
                        }
                    }
                    tbody {
                        for category in categories {
                            {
                                let edit_target = category.clone();
                                let delete_target = category.clone();
                                let description = category.description.clone().unwrap_or_default();
                                rsx! {
                                    tr {
                                        key: "{category.id}",
                                        td { "{category.name}" }
                                        td { class: "opacity-70", "{description}" }
                                        td { span { class: status_badge(category.status), "{category.status}" } }
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
                                                            category_to_delete.set(Some(delete_target.clone()));
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
            title: "Delete Category".to_string(),
            message: rsx!(
                if let Some(category) = category_to_delete() {
                    p {
                        class: "py-4",
                        "Delete "
                        span { class: "font-bold", "\"{category.name}\"" }
                        "? Categories still used by transactions cannot be deleted."
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
fn CategoryFormModal(
    mut show: Signal<bool>,
    editing: Option<CategoryDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut active = use_signal(|| true);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let editing_id = editing.as_ref().map(|c| c.id);

    // Reset form when modal opens
    use_effect(use_reactive!(|editing| {
        if show() {
            name.set(editing.as_ref().map(|c| c.name.clone()).unwrap_or_default());
            description.set(
                editing
                    .as_ref()
                    .and_then(|c| c.description.clone())
                    .unwrap_or_default(),
            );
            active.set(editing.as_ref().is_none_or(|c| c.status == Status::Active));
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
                update_category(
                    id,
                    UpdateCategoryDto {
                        name: Some(name.peek().clone()),
                        description: Some(description.peek().clone()),
                        status: Some(status),
                    },
                )
                .await
            }
            None => {
                create_category(CreateCategoryDto {
                    name: name.peek().clone(),
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
                    tracing::error!("Failed to save category: {}", err);
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
        "Edit Category"
    } else {
        "New Category"
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
