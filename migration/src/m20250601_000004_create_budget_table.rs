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
                    .table(Budget::Table)
                    .if_not_exists()
                    .col(pk_auto(Budget::Id))
                    .col(integer(Budget::BudgetOwnerId))
                    .col(integer(Budget::Year))
                    .col(double(Budget::AmountPlanned))
                    .col(double_null(Budget::AmountRevised))
                    .col(integer(Budget::CreatedBy))
                    .col(
                        timestamp(Budget::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Budget::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_budget_budget_owner_id")
                            .from(Budget::Table, Budget::BudgetOwnerId)
                            .to(BudgetOwner::Table, BudgetOwner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_budget_created_by")
                            .from(Budget::Table, Budget::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One budget per owner per year
        manager
            .create_index(
                Index::create()
                    .name("idx_budget_owner_year_unique")
                    .table(Budget::Table)
                    .col(Budget::BudgetOwnerId)
                    .col(Budget::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Budget::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Budget {
    Table,
    Id,
    BudgetOwnerId,
    Year,
    AmountPlanned,
    AmountRevised,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
