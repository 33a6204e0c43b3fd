use crate::server::data::user_access::UserAccessRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod grant;
mod owners_for_user;
