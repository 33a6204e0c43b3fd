use crate::{
    model::{api::Status, user::UserRole},
    server::{
        error::{auth::AuthError, AppError},
        model::user::User,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod budget;
mod budget_owner;
mod category;
mod transaction;
mod user;
mod user_access;

/// Loads a factory-created user as a domain model.
fn as_user(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}
