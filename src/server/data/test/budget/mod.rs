use crate::server::{
    data::budget::BudgetRepository,
    model::{
        budget::{BudgetFilter, CreateBudgetParams, UpdateBudgetParams},
        pagination::PageRequest,
        scope::OwnerScope,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_owner;
mod get_paginated;
mod update;
