use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_user_table::User,
    m20250601_000002_create_budget_owner_table::BudgetOwner,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccess::Table)
                    .if_not_exists()
                    .col(integer(UserAccess::UserId))
                    .col(integer(UserAccess::BudgetOwnerId))
                    .col(
                        timestamp(UserAccess::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserAccess::UserId)
                            .col(UserAccess::BudgetOwnerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_access_user_id")
                            .from(UserAccess::Table, UserAccess::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_access_budget_owner_id")
                            .from(UserAccess::Table, UserAccess::BudgetOwnerId)
                            .to(BudgetOwner::Table, BudgetOwner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAccess::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAccess {
    Table,
    UserId,
    BudgetOwnerId,
    CreatedAt,
}
