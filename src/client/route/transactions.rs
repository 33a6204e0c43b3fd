use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            ConfirmationModal, ErrorPage, FullScreenModal, LoadingPage, Page, Pagination,
            YearSelect,
        },
        constant::{DEFAULT_PAGE_SIZE, SITE_NAME},
        format,
        model::error::ApiError,
        store::user::UserState,
    },
    model::{
        api::PaginatedDto,
        budget_owner::BudgetOwnerDto,
        category::CategoryDto,
        transaction::{CreateTransactionDto, TransactionDto, UpdateTransactionDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    budget_owner::get_all_budget_owners,
    category::get_active_categories,
    transaction::{
        create_transaction, delete_transaction, get_transactions, update_transaction,
        TransactionQuery,
    },
};

/// Parses an `<input type="date">` value.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[component]
pub fn Transactions() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let current_user = user_state.read().user.clone();

    let mut page = use_signal(|| 1u64);
    let per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let year = use_signal(|| None::<i32>);
    let mut owner_filter = use_signal(|| None::<i32>);
    let mut category_filter = use_signal(|| None::<i32>);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);

    let mut transactions = use_signal(|| None::<Result<PaginatedDto<TransactionDto>, ApiError>>);
    let mut owners = use_signal(Vec::<BudgetOwnerDto>::new);
    let mut categories = use_signal(Vec::<CategoryDto>::new);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<TransactionDto>);

    #[cfg(feature = "web")]
    let options_future = use_resource(move || async move {
        let owners = get_all_budget_owners().await?;
        let categories = get_active_categories().await?;
        Ok::<_, ApiError>((owners, categories))
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = options_future.read_unchecked().as_ref() {
            match result {
                Ok((owner_list, category_list)) => {
                    owners.set(owner_list.clone());
                    categories.set(category_list.clone());
                }
                Err(err) => tracing::error!("Failed to fetch transaction filters: {}", err),
            }
        }
    });

    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        let _ = refetch_trigger();
        let filter = TransactionQuery {
            budget_owner_id: owner_filter(),
            category_id: category_filter(),
            start_date: parse_date(&start_date()),
            end_date: parse_date(&end_date()),
            year: year(),
        };
        get_transactions(page(), per_page(), filter).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*fetch_future.read_unchecked() {
        Some(Ok(data)) => transactions.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch transactions: {}", err);
            transactions.set(Some(Err(err.clone())));
        }
        None => (),
    });

    let owner_value = owner_filter().map(|id| id.to_string()).unwrap_or_default();
    let category_value = category_filter().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        Title { "Transactions | {SITE_NAME}" }
        match transactions() {
            Some(Ok(data)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex flex-wrap items-center justify-between gap-4",
                            h1 { class: "text-lg sm:text-2xl", "Transactions" }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    editing.set(None);
                                    show_form.set(true);
                                },
                                "New Transaction"
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
                            select {
                                class: "select select-bordered",
                                value: "{category_value}",
                                onchange: move |evt| {
                                    category_filter.set(evt.value().parse::<i32>().ok());
                                    page.set(1);
                                },
                                option { value: "", "All categories" }
                                for category in categories() {
                                    option { key: "{category.id}", value: "{category.id}", "{category.name}" }
                                }
                            }
                            input {
                                r#type: "date",
                                class: "input input-bordered",
                                value: "{start_date()}",
                                onchange: move |evt| {
                                    start_date.set(evt.value());
                                    page.set(1);
                                },
                            }
                            input {
                                r#type: "date",
                                class: "input input-bordered",
                                value: "{end_date()}",
                                onchange: move |evt| {
                                    end_date.set(evt.value());
                                    page.set(1);
                                },
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                TransactionTable {
                                    transactions: data.items,
                                    current_user_id: current_user.as_ref().map(|u| u.id),
                                    is_admin: current_user.as_ref().is_some_and(|u| u.is_admin()),
                                    on_edit: move |transaction: TransactionDto| {
                                        editing.set(Some(transaction));
                                        show_form.set(true);
                                    },
                                    refetch_trigger,
                                }
                                Pagination { page, per_page, meta: data.meta }
                            }
                        }
                    }
                }
                TransactionFormModal {
                    show: show_form,
                    editing: editing(),
                    owners: owners(),
                    categories: categories(),
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
fn TransactionTable(
    transactions: Vec<TransactionDto>,
    current_user_id: Option<i32>,
    is_admin: bool,
    on_edit: EventHandler<TransactionDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut transaction_to_delete = use_signal(|| None::<TransactionDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let id = transaction_to_delete.peek().as_ref().map(|t| t.id)?;
        Some(delete_transaction(id).await)
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
                    tracing::error!("Failed to delete transaction: {}", err);
                    delete_error.set(Some(err.message.clone()));
                }
            }
            is_deleting.set(false);
        }
    });

    rsx! {
        if transactions.is_empty() {
            div { class: "text-center py-8 opacity-50", "No transactions found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Description" }
                            th { "Budget owner" }
                            th { "Category" }
                            th { class: "text-right", "Amount" }
                            th { "Created by" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for transaction in transactions {
                            {
                                let can_modify = is_admin || current_user_id == Some(transaction.created_by);
                                let edit_target = transaction.clone();
                                let delete_target = transaction.clone();
                                rsx! {
                                    tr {
                                        key: "{transaction.id}",
                                        td { class: "whitespace-nowrap", {format::date(&transaction.date)} }
                                        td {
                                            div {
                                                class: "flex flex-col",
                                                span { "{transaction.description}" }
                                                if let Some(url) = transaction.receipt_url.clone() {
                                                    a {
                                                        class: "link text-xs",
                                                        href: "{url}",
                                                        target: "_blank",
                                                        rel: "noopener noreferrer",
                                                        "Receipt"
                                                    }
                                                }
                                            }
                                        }
                                        td { "{transaction.budget_owner_name}" }
                                        td { "{transaction.category_name}" }
                                        td { class: "text-right whitespace-nowrap", {format::currency(transaction.amount)} }
                                        td { "{transaction.created_by_name}" }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                if can_modify {
                                                    button {
                                                        class: "btn btn-sm",
                                                        onclick: move |_| on_edit.call(edit_target.clone()),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            delete_error.set(None);
                                                            transaction_to_delete.set(Some(delete_target.clone()));
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
            title: "Delete Transaction".to_string(),
            message: rsx!(
                if let Some(transaction) = transaction_to_delete() {
                    p {
                        class: "py-4",
                        "Delete "
                        span { class: "font-bold", "\"{transaction.description}\"" }
                        "? This cannot be undone."
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
fn TransactionFormModal(
    mut show: Signal<bool>,
    editing: Option<TransactionDto>,
    owners: Vec<BudgetOwnerDto>,
    categories: Vec<CategoryDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut owner_id = use_signal(String::new);
    let mut category_id = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut receipt_url = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let editing_id = editing.as_ref().map(|t| t.id);

    // Reset form when modal opens
    use_effect(use_reactive!(|editing| {
        if show() {
            match &editing {
                Some(transaction) => {
                    owner_id.set(transaction.budget_owner_id.to_string());
                    category_id.set(transaction.category_id.to_string());
                    date.set(format::date(&transaction.date));
                    amount.set(transaction.amount.to_string());
                    description.set(transaction.description.clone());
                    receipt_url.set(transaction.receipt_url.clone().unwrap_or_default());
                }
                None => {
                    owner_id.set(String::new());
                    category_id.set(String::new());
                    date.set(String::new());
                    amount.set(String::new());
                    description.set(String::new());
                    receipt_url.set(String::new());
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

        let parsed = (
            owner_id.peek().parse::<i32>().ok(),
            category_id.peek().parse::<i32>().ok(),
            parse_date(&date.peek()).and_then(|d| d.and_hms_opt(0, 0, 0)),
            amount.peek().trim().parse::<f64>().ok(),
        );
        let (Some(budget_owner_id), Some(category_id), Some(date), Some(amount)) = parsed else {
            return Some(Err(ApiError::new(400, "Invalid transaction details")));
        };
        let date = date.and_utc();
        let description = description.peek().clone();
        let receipt_url = receipt_url.peek().trim().to_string();

        let result = match editing_id {
            Some(id) => {
                update_transaction(
                    id,
                    UpdateTransactionDto {
                        budget_owner_id: Some(budget_owner_id),
                        category_id: Some(category_id),
                        date: Some(date),
                        amount: Some(amount),
                        description: Some(description),
                        receipt_url: Some(receipt_url),
                    },
                )
                .await
            }
            None => {
                create_transaction(CreateTransactionDto {
                    budget_owner_id,
                    category_id,
                    date,
                    amount,
                    description,
                    receipt_url: Some(receipt_url).filter(|url| !url.is_empty()),
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
                    tracing::error!("Failed to save transaction: {}", err);
                    error_message.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if owner_id().is_empty() || category_id().is_empty() {
            error_message.set(Some("Budget owner and category are required".to_string()));
            return;
        }
        if parse_date(&date()).is_none() {
            error_message.set(Some("Date is required".to_string()));
            return;
        }
        if amount().trim().parse::<f64>().is_err() {
            error_message.set(Some("Amount must be a number".to_string()));
            return;
        }
        if description().trim().is_empty() {
            error_message.set(Some("Description is required".to_string()));
            return;
        }

        error_message.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let title = if editing_id.is_some() {
        "Edit Transaction"
    } else {
        "New Transaction"
    };

    rsx! {
        FullScreenModal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting,
            form {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                onsubmit: on_submit,
                label {
                    class: "form-control flex flex-col gap-1",
                    span { class: "label-text", "Budget owner" }
                    select {
                        class: "select select-bordered w-full",
                        value: "{owner_id()}",
                        disabled: is_submitting,
                        onchange: move |evt| owner_id.set(evt.value()),
                        option { value: "", disabled: true, "Select a budget owner" }
                        for owner in owners {
                            option { key: "{owner.id}", value: "{owner.id}", "{owner.name}" }
                        }
                    }
                }
                label {
                    class: "form-control flex flex-col gap-1",
                    span { class: "label-text", "Category" }
                    select {
                        class: "select select-bordered w-full",
                        value: "{category_id()}",
                        disabled: is_submitting,
                        onchange: move |evt| category_id.set(evt.value()),
                        option { value: "", disabled: true, "Select a category" }
                        for category in categories {
                            option { key: "{category.id}", value: "{category.id}", "{category.name}" }
                        }
                    }
                }
                label {
                    class: "form-control flex flex-col gap-1",
                    span { class: "label-text", "Date" }
                    input {
                        r#type: "date",
                        class: "input input-bordered w-full",
                        value: "{date()}",
                        disabled: is_submitting,
                        oninput: move |evt| date.set(evt.value()),
                    }
                }
                label {
                    class: "form-control flex flex-col gap-1",
                    span { class: "label-text", "Amount" }
                    input {
                        r#type: "number",
                        step: "any",
                        min: "0",
                        class: "input input-bordered w-full",
                        value: "{amount()}",
                        disabled: is_submitting,
                        oninput: move |evt| amount.set(evt.value()),
                    }
                }
                label {
                    class: "form-control flex flex-col gap-1 md:col-span-2",
                    span { class: "label-text", "Description" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        value: "{description()}",
                        disabled: is_submitting,
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                label {
                    class: "form-control flex flex-col gap-1 md:col-span-2",
                    span { class: "label-text", "Receipt URL (optional)" }
                    input {
                        r#type: "url",
                        class: "input input-bordered w-full",
                        value: "{receipt_url()}",
                        disabled: is_submitting,
                        oninput: move |evt| receipt_url.set(evt.value()),
                    }
                }
                if let Some(err) = error_message() {
                    div { class: "alert alert-error md:col-span-2", span { "{err}" } }
                }
                div {
                    class: "modal-action md:col-span-2",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_input_values() {
        assert_eq!(parse_date("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(parse_date(" 2024-03-15 "), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("15/03/2024"), None);
    }
}
