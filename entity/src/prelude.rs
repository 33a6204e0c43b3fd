pub use super::budget::Entity as Budget;
pub use super::budget_owner::Entity as BudgetOwner;
pub use super::category::Entity as Category;
pub use super::transaction::Entity as Transaction;
pub use super::user::Entity as User;
pub use super::user_access::Entity as UserAccess;
