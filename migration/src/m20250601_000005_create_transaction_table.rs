use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_user_table::User,
    m20250601_000002_create_budget_owner_table::BudgetOwner,
    m20250601_000003_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transaction::Table)
                    .if_not_exists()
                    .col(pk_auto(Transaction::Id))
                    .col(integer(Transaction::BudgetOwnerId))
                    .col(integer(Transaction::CategoryId))
                    .col(timestamp(Transaction::Date))
                    .col(double(Transaction::Amount))
                    .col(text(Transaction::Description))
                    .col(string_null(Transaction::ReceiptUrl))
                    .col(integer(Transaction::CreatedBy))
                    .col(
                        timestamp(Transaction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Transaction::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_budget_owner_id")
                            .from(Transaction::Table, Transaction::BudgetOwnerId)
                            .to(BudgetOwner::Table, BudgetOwner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_category_id")
                            .from(Transaction::Table, Transaction::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_created_by")
                            .from(Transaction::Table, Transaction::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_transaction_budget_owner_id", Transaction::BudgetOwnerId),
            ("idx_transaction_category_id", Transaction::CategoryId),
            ("idx_transaction_date", Transaction::Date),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Transaction::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transaction {
    Table,
    Id,
    BudgetOwnerId,
    CategoryId,
    Date,
    Amount,
    Description,
    ReceiptUrl,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
