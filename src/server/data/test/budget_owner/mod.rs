use crate::{
    model::api::Status,
    server::{
        data::budget_owner::BudgetOwnerRepository,
        model::{
            budget_owner::{BudgetOwnerFilter, CreateBudgetOwnerParams, UpdateBudgetOwnerParams},
            pagination::PageRequest,
            scope::OwnerScope,
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;
