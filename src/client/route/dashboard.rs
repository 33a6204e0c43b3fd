use chrono::{Datelike, Utc};
use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page, UtilizationBar, YearSelect},
        constant::SITE_NAME,
        format,
        model::error::ApiError,
        router::Route,
    },
    model::{
        api::PaginatedDto,
        budget::{BudgetDto, BudgetSummaryDto},
        transaction::TransactionDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    budget::{get_budget_summary, get_budgets},
    transaction::{get_transactions, TransactionQuery},
};

const OWNER_BUDGETS: u64 = 100;
const RECENT_TRANSACTIONS: u64 = 5;

#[derive(Clone, PartialEq)]
struct DashboardData {
    summary: BudgetSummaryDto,
    budgets: PaginatedDto<BudgetDto>,
    transactions: PaginatedDto<TransactionDto>,
}

#[component]
pub fn Dashboard() -> Element {
    let year = use_signal(|| Some(Utc::now().year()));
    let mut data = use_signal(|| None::<Result<DashboardData, ApiError>>);

    #[cfg(feature = "web")]
    let fetch_future = use_resource(move || async move {
        let year = year();
        let summary = get_budget_summary(year).await?;
        let budgets = get_budgets(1, OWNER_BUDGETS, year, None).await?;
        let transactions = get_transactions(
            1,
            RECENT_TRANSACTIONS,
            TransactionQuery {
                year,
                ..Default::default()
            },
        )
        .await?;

        Ok::<_, ApiError>(DashboardData {
            summary,
            budgets,
            transactions,
        })
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*fetch_future.read_unchecked() {
        Some(Ok(result)) => data.set(Some(Ok(result.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch dashboard: {}", err);
            data.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        match data() {
            Some(Ok(data)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex flex-wrap items-center justify-between gap-4",
                            h1 { class: "text-lg sm:text-2xl", "Dashboard" }
                            YearSelect { year }
                        }
                        SummaryCards { summary: data.summary }
                        div {
                            class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                            OwnerUtilization { budgets: data.budgets.items }
                            RecentTransactions { transactions: data.transactions.items }
                        }
                    }
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
fn SummaryCards(summary: BudgetSummaryDto) -> Element {
    let planned = format::currency(summary.total_planned);

    rsx! {
        div {
            class: "stats stats-vertical md:stats-horizontal bg-base-200 w-full",
            div {
                class: "stat",
                div { class: "stat-title", "Budget" }
                div { class: "stat-value text-2xl", {format::currency(summary.total_revised)} }
                div { class: "stat-desc", "{summary.budget_count} budgets, planned {planned}" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Spent" }
                div { class: "stat-value text-2xl", {format::currency(summary.total_spent)} }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Remaining" }
                div {
                    class: if summary.total_remaining < 0.0 { "stat-value text-2xl text-error" } else { "stat-value text-2xl" },
                    {format::currency(summary.total_remaining)}
                }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Average utilization" }
                div { class: "stat-value text-2xl", {format::percentage(summary.average_utilization)} }
            }
        }
    }
}

#[component]
fn OwnerUtilization(budgets: Vec<BudgetDto>) -> Element {
    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "card-title", "Utilization by budget owner" }
                    Link { to: Route::Budgets {}, class: "btn btn-sm btn-ghost", "View all" }
                }
                if budgets.is_empty() {
                    p { class: "text-center py-8 opacity-50", "No budgets for this period" }
                } else {
                    for budget in budgets {
                        div {
                            key: "{budget.id}",
                            class: "flex flex-col gap-1 py-2",
                            div {
                                class: "flex justify-between text-sm",
                                span { "{budget.budget_owner_name} ({budget.year})" }
                                span { class: "opacity-70", {format::currency(budget.amount_spent)} }
                            }
                            UtilizationBar { percentage: budget.utilization_percentage }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentTransactions(transactions: Vec<TransactionDto>) -> Element {
    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "card-title", "Recent transactions" }
                    Link { to: Route::Transactions {}, class: "btn btn-sm btn-ghost", "View all" }
                }
                if transactions.is_empty() {
                    p { class: "text-center py-8 opacity-50", "No transactions for this period" }
                } else {
                    for transaction in transactions {
                        div {
                            key: "{transaction.id}",
                            class: "flex justify-between gap-4 py-2 text-sm",
                            div {
                                class: "flex flex-col",
                                span { "{transaction.description}" }
                                span {
                                    class: "text-xs opacity-70",
                                    {format::date(&transaction.date)}
                                    " · {transaction.budget_owner_name} · {transaction.category_name}"
                                }
                            }
                            span { class: "whitespace-nowrap", {format::currency(transaction.amount)} }
                        }
                    }
                }
            }
        }
    }
}
