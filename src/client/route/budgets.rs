use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            ConfirmationModal, ErrorPage, LoadingPage, Modal, Page, Pagination, UtilizationBar,
            YearSelect,
        },
        constant::{DEFAULT_PAGE_SIZE, SITE_NAME},
        format,
        model::error::ApiError,
        store::user::UserState,
    },
    model::{
        api::PaginatedDto,
        budget::{BudgetDto, CreateBudgetDto, UpdateBudgetDto},
        budget_owner::BudgetOwnerDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    budget::{create_budget, delete_budget, get_budgets, update_budget},
    budget_owner::get_all_budget_owners,
};

#[component]
pub fn Budgets() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let is_admin = user_state.read().is_admin();

    let mut page = use_signal(|| 1u64);
    let per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let year = use_signal(|| None::<i32>);
    let mut owner_filter = use_signal(|| None::<i32>);
    let refetch_trigger = use_signal(|| 0u32);

    let mut budgets = use_signal(|| None::<Result<PaginatedDto<BudgetDto>, ApiError>>);
    let mut owners = use_signal(Vec::<BudgetOwnerDto>::new);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<BudgetDto>);

    #[cfg(feature = "web")]
    let owners_future = use_resource(move || async move { get_all_budget_owners().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = owners_future.read_unchecked().as_ref() {
            match result {
                Ok(list) => owners.set(list.clone()),
                Err(err) => tracing::error!("Failed to fetch budget owners: {}", err),
            }
        }
    });

    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_budgets(page(), per_page(), year(), owner_filter()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*fetch_future.read_unchecked() {
        Some(Ok(data)) => budgets.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch budgets: {}", err);
            budgets.set(Some(Err(err.clone())));
        }
        None => (),
    });

    let owner_value = owner_filter().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        Title { "Budgets | {SITE_NAME}" }
        match budgets() {
            Some(Ok(data)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex flex-wrap items-center justify-between gap-4",
                            h1 { class: "text-lg sm:text-2xl", "Budgets" }
                            if is_admin {
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| {
                                        editing.set(None);
                                        show_form.set(true);
                                    },
                                    "New Budget"
                                }
                            }
                        }
                        div {
                            class: "flex flex-wrap gap-2",
                            YearSelect { year, page }
                            select {
                                class: "select select-bordered",
                                value: "{owner_value}",
                                onchange: move |evt| {
                                    owner_filter.set(evt.value().parse::<i32>().ok());
                                    page.set(1);
                                },
                                option { value: "", "All budget owners" }
                                for owner in owners() {
                                    option { key: "{owner.id}", value: "{owner.id}", "{owner.name}" }
                                }
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                BudgetTable {
                                    budgets: data.items,
                                    is_admin,
                                    on_edit: move |budget: BudgetDto| {
                                        editing.set(Some(budget));
                                        show_form.set(true);
                                    },
                                    refetch_trigger,
                                }
                                Pagination { page, per_page, meta: data.meta }
                            }
                        }
                    }
                }
                BudgetFormModal {
                    show: show_form,
                    editing: editing(),
                    owners: owners(),
                    refetch_trigger,
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
fn BudgetTable(
    budgets: Vec<BudgetDto>,
    is_admin: bool,
    on_edit: EventHandler<BudgetDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut budget_to_delete = use_signal(|| None::<BudgetDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let id = budget_to_delete.peek().as_ref().map(|b| b.id)?;
        Some(delete_budget(id).await)
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
                    tracing::error!("Failed to delete budget: {}", err);
                    delete_error.set(Some(err.message.clone()));
                }
            }
            is_deleting.set(false);
        }
    });

    rsx! {
        if budgets.is_empty() {
            div { class: "text-center py-8 opacity-50", "No budgets found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Budget owner" }
                            th { "Year" }
                            th { class: "text-right", "Planned" }
                            th { class: "text-right", "Revised" }
                            th { class: "text-right", "Spent" }
                            th { class: "text-right", "Remaining" }
                            th { "Utilization" }
                            if is_admin {
                                th { class: "text-right", "Actions" }
                            }
                        }
                    }
                    tbody {
                        for budget in budgets {
                            {
                                let edit_budget = budget.clone();
                                let delete_target = budget.clone();
                                let revised = budget
                                    .amount_revised
                                    .map(format::currency)
                                    .unwrap_or_else(|| "-".to_string());
                                rsx! {
                                    tr {
                                        key: "{budget.id}",
                                        td { "{budget.budget_owner_name}" }
                                        td { "{budget.year}" }
                                        td { class: "text-right", {format::currency(budget.amount_planned)} }
                                        td { class: "text-right", "{revised}" }
                                        td { class: "text-right", {format::currency(budget.amount_spent)} }
                                        td {
                                            class: if budget.amount_remaining < 0.0 { "text-right text-error" } else { "text-right" },
                                            {format::currency(budget.amount_remaining)}
                                        }
                                        td { UtilizationBar { percentage: budget.utilization_percentage } }
                                        if is_admin {
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm",
                                                        onclick: move |_| on_edit.call(edit_budget.clone()),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            delete_error.set(None);
                                                            budget_to_delete.set(Some(delete_target.clone()));
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
            title: "Delete Budget".to_string(),
            message: rsx!(
                if let Some(budget) = budget_to_delete() {
                    p {
                        class: "py-4",
                        "Delete the "
                        span { class: "font-bold", "{budget.year}" }
                        " budget of "
                        span { class: "font-bold", "\"{budget.budget_owner_name}\"" }
                        "? Transactions are kept."
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
fn BudgetFormModal(
    mut show: Signal<bool>,
    editing: Option<BudgetDto>,
    owners: Vec<BudgetOwnerDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut owner_id = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut planned = use_signal(String::new);
    let mut revised = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let editing_id = editing.as_ref().map(|b| b.id);

    // Reset form when modal opens
    use_effect(use_reactive!(|editing| {
        if show() {
            match &editing {
                Some(budget) => {
                    owner_id.set(budget.budget_owner_id.to_string());
                    year.set(budget.year.to_string());
                    planned.set(budget.amount_planned.to_string());
                    revised.set(
                        budget
                            .amount_revised
                            .map(|a| a.to_string())
                            .unwrap_or_default(),
                    );
                }
                None => {
                    owner_id.set(String::new());
                    year.set(String::new());
                    planned.set(String::new());
                    revised.set(String::new());
                }
            }
            error_message.set(None);
            should_submit.set(false);
        }
    }));

    #[cfg(feature = "web")]
    let submit_future = use_resource(move || async move {
        if !should_submit() {
            return None;
        }

        let amount_planned = planned.peek().trim().parse::<f64>().ok();
        let amount_revised = revised.peek().trim().parse::<f64>().ok();

        let result = match editing_id {
            Some(id) => {
                update_budget(
                    id,
                    UpdateBudgetDto {
                        amount_planned,
                        amount_revised: Some(amount_revised),
                    },
                )
                .await
            }
            None => {
                create_budget(CreateBudgetDto {
                    budget_owner_id: owner_id.peek().parse().unwrap_or_default(),
                    year: year.peek().trim().parse().unwrap_or_default(),
                    amount_planned: amount_planned.unwrap_or_default(),
                    amount_revised,
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
                    tracing::error!("Failed to save budget: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if editing_id.is_none() && (owner_id().is_empty() || year().trim().parse::<i32>().is_err())
        {
            error_message.set(Some("Budget owner and year are required".to_string()));
            return;
        }
        if planned().trim().parse::<f64>().is_err() {
            error_message.set(Some("Planned amount must be a number".to_string()));
            return;
        }
        if !revised().trim().is_empty() && revised().trim().parse::<f64>().is_err() {
            error_message.set(Some("Revised amount must be a number".to_string()));
            return;
        }

        error_message.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let title = if editing_id.is_some() { "Edit Budget" } else { "New Budget" };

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
                    span { class: "label-text", "Budget owner" }
                    select {
                        class: "select select-bordered w-full",
                        value: "{owner_id()}",
                        disabled: is_submitting || editing_id.is_some(),
                        onchange: move |evt| owner_id.set(evt.value()),
                        option { value: "", disabled: true, "Select a budget owner" }
                        for owner in owners {
                            option { key: "{owner.id}", value: "{owner.id}", "{owner.name}" }
                        }
                    }
                }
                label {
                    class: "form-control flex flex-col gap-1",
                    span { class: "label-text", "Year" }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        value: "{year()}",
                        disabled: is_submitting || editing_id.is_some(),
                        oninput: move |evt| year.set(evt.value()),
                    }
                }
                label {
                    class: "form-control flex flex-col gap-1",
                    span { class: "label-text", "Planned amount" }
                    input {
                        r#type: "number",
                        step: "any",
                        class: "input input-bordered w-full",
                        value: "{planned()}",
                        disabled: is_submitting,
                        oninput: move |evt| planned.set(evt.value()),
                    }
                }
                label {
                    class: "form-control flex flex-col gap-1",
                    span { class: "label-text", "Revised amount (optional)" }
                    input {
                        r#type: "number",
                        step: "any",
                        class: "input input-bordered w-full",
                        value: "{revised()}",
                        disabled: is_submitting,
                        oninput: move |evt| revised.set(evt.value()),
                    }
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
