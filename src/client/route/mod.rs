pub mod admin;
pub mod budgets;
pub mod dashboard;
pub mod login;
pub mod master;
pub mod not_found;
pub mod transactions;

pub use budgets::Budgets;
pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use transactions::Transactions;
