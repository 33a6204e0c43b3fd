//! Reference data pages: budget owners and categories.

pub mod budget_owners;
pub mod categories;

pub use budget_owners::BudgetOwners;
pub use categories::Categories;

use crate::model::api::Status;

fn status_badge(status: Status) -> &'static str {
    match status {
        Status::Active => "badge badge-sm badge-success",
        Status::Inactive => "badge badge-sm badge-ghost",
    }
}
