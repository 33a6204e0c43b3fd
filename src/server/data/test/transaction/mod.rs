use crate::server::{
    data::transaction::TransactionRepository,
    model::{
        pagination::PageRequest,
        scope::OwnerScope,
        transaction::{CreateTransactionParams, TransactionFilter, UpdateTransactionParams},
    },
};
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod totals_for_owner_year;
mod update;
