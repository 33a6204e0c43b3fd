use crate::{
    model::api::Status,
    server::{
        data::category::CategoryRepository,
        model::{
            category::{CategoryFilter, CreateCategoryParams, UpdateCategoryParams},
            pagination::PageRequest,
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;
