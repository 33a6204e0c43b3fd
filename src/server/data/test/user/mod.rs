use crate::{
    model::{api::Status, user::UserRole},
    server::{
        data::user::UserRepository,
        model::{
            pagination::PageRequest,
            user::{CreateUserParams, UpdateUserParams},
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod get_paginated;
mod super_admin_exists;
mod update;
