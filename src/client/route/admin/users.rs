use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage, Modal, Page, Pagination},
        constant::{DEFAULT_PAGE_SIZE, SITE_NAME},
        model::error::ApiError,
        route::admin::access::AccessModal,
        store::user::UserState,
    },
    model::{
        api::{PaginatedDto, Status},
        user::{CreateUserDto, UpdateUserDto, UserDto, UserRole},
    },
};

#[cfg(feature = "web")]
use crate::client::api::user::{create_user, delete_user, get_users, update_user};

#[component]
pub fn AdminUsers() -> Element {
    let page = use_signal(|| 1u64);
    let per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let refetch_trigger = use_signal(|| 0u32);

    let mut users = use_signal(|| None::<Result<PaginatedDto<UserDto>, ApiError>>);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<UserDto>);
    let mut show_access = use_signal(|| false);
    let mut access_user = use_signal(|| None::<UserDto>);

    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_users(page(), per_page()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*fetch_future.read_unchecked() {
        Some(Ok(data)) => users.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch users: {}", err);
            users.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "Users | {SITE_NAME}" }
        match users() {
            Some(Ok(data)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex flex-wrap items-center justify-between gap-4",
                            h1 { class: "text-lg sm:text-2xl", "Users" }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    editing.set(None);
                                    show_form.set(true);
                                },
                                "New User"
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                UserTable {
                                    users: data.items,
                                    on_edit: move |user: UserDto| {
                                        editing.set(Some(user));
                                        show_form.set(true);
                                    },
                                    on_access: move |user: UserDto| {
                                        access_user.set(Some(user));
                                        show_access.set(true);
                                    },
                                    refetch_trigger,
                                }
                                Pagination { page, per_page, meta: data.meta }
                            }
                        }
                    }
                }
                UserFormModal { show: show_form, editing: editing(), refetch_trigger }
                if let Some(user) = access_user() {
                    AccessModal { show: show_access, user }
                }
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
fn UserTable(
    users: Vec<UserDto>,
    on_edit: EventHandler<UserDto>,
    on_access: EventHandler<UserDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let current_user_id = user_state.read().user.as_ref().map(|u| u.id);

    let mut show_delete_modal = use_signal(|| false);
    let mut user_to_delete = use_signal(|| None::<UserDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let id = user_to_delete.peek().as_ref().map(|u| u.id)?;
        Some(delete_user(id).await)
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
                    tracing::error!("Failed to delete user: {}", err);
                    delete_error.set(Some(err.message.clone()));
                }
            }
            is_deleting.set(false);
        }
    });

    rsx! {
        if users.is_empty() {
            div { class: "text-center py-8 opacity-50", "No users found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Status" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for user in users {
                            {
                                let is_current_user = Some(user.id) == current_user_id;
                                let edit_target = user.clone();
                                let access_target = user.clone();
                                let delete_target = user.clone();
                                let role = if user.is_admin() { "Super admin" } else { "User" };
                                rsx! {
                                    tr {
                                        key: "{user.id}",
                                        td {
                                            div {
                                                class: "flex items-center gap-2",
                                                span { "{user.name}" }
                                                if is_current_user {
                                                    span { class: "badge badge-sm badge-primary", "You" }
                                                }
                                            }
                                        }
                                        td { "{user.email}" }
                                        td { "{role}" }
                                        td { "{user.status}" }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                if !user.is_admin() {
                                                    button {
                                                        class: "btn btn-sm btn-outline",
                                                        onclick: move |_| on_access.call(access_target.clone()),
                                                        "Access"
                                                    }
                                                }
                                                button {
                                                    class: "btn btn-sm",
                                                    onclick: move |_| on_edit.call(edit_target.clone()),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    disabled: is_current_user,
                                                    onclick: move |_| {
                                                        delete_error.set(None);
                                                        user_to_delete.set(Some(delete_target.clone()));
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

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete User".to_string(),
            message: rsx!(
                if let Some(user) = user_to_delete() {
                    p {
                        class: "py-4",
                        "Delete "
                        span { class: "font-bold", "\"{user.name}\"" }
                        "? Users who recorded budgets or transactions can only be deactivated."
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
fn UserFormModal(
    mut show: Signal<bool>,
    editing: Option<UserDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut admin = use_signal(|| false);
    let mut active = use_signal(|| true);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let editing_id = editing.as_ref().map(|u| u.id);

    // Reset form when modal opens
    use_effect(use_reactive!(|editing| {
        if show() {
            email.set(editing.as_ref().map(|u| u.email.clone()).unwrap_or_default());
            name.set(editing.as_ref().map(|u| u.name.clone()).unwrap_or_default());
            password.set(String::new());
            admin.set(editing.as_ref().is_some_and(|u| u.is_admin()));
            active.set(editing.as_ref().is_none_or(|u| u.status == Status::Active));
            error_message.set(None);
            should_submit.set(false);
        }
    }));

    #[cfg(feature = "web")]
    let submit_future = use_resource(move || async move {
        if !should_submit() {
            return None;
        }

        let role = if *admin.peek() {
            UserRole::SuperAdmin
        } else {
            UserRole::User
        };
        let status = if *active.peek() {
            Status::Active
        } else {
            Status::Inactive
        };
        let password = password.peek().clone();

        let result = match editing_id {
            Some(id) => {
                update_user(
                    id,
                    UpdateUserDto {
                        name: Some(name.peek().clone()),
                        role: Some(role),
                        status: Some(status),
                        password: Some(password).filter(|p| !p.is_empty()),
                    },
                )
                .await
            }
            None => {
                create_user(CreateUserDto {
                    email: email.peek().clone(),
                    name: name.peek().clone(),
                    password,
                    role: Some(role),
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
                    tracing::error!("Failed to save user: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() || (editing_id.is_none() && email().trim().is_empty()) {
            error_message.set(Some("Name and email are required".to_string()));
            return;
        }
        if editing_id.is_none() && password().is_empty() {
            error_message.set(Some("Password is required".to_string()));
            return;
        }

        error_message.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let title = if editing_id.is_some() { "Edit User" } else { "New User" };
    let password_label = if editing_id.is_some() {
        "New password (leave blank to keep)"
    } else {
        "Password"
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
                    span { class: "label-text", "Email" }
                    input {
                        r#type: "email",
                        class: "input input-bordered w-full",
                        value: "{email()}",
                        disabled: is_submitting || editing_id.is_some(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
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
                    span { class: "label-text", "{password_label}" }
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        autocomplete: "new-password",
                        value: "{password()}",
                        disabled: is_submitting,
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-primary",
                        checked: admin(),
                        disabled: is_submitting,
                        onchange: move |evt| admin.set(evt.checked()),
                    }
                    span { class: "label-text", "Super admin" }
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
