mod budget;
mod budget_owner;
mod category;
mod transaction;
mod user;
mod user_access;
