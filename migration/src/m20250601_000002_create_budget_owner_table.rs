use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BudgetOwner::Table)
                    .if_not_exists()
                    .col(pk_auto(BudgetOwner::Id))
                    .col(string_uniq(BudgetOwner::Name))
                    .col(string_null(BudgetOwner::Code).unique_key())
                    .col(text_null(BudgetOwner::Description))
                    .col(string(BudgetOwner::Status).default("ACTIVE"))
                    .col(
                        timestamp(BudgetOwner::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(BudgetOwner::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BudgetOwner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BudgetOwner {
    Table,
    Id,
    Name,
    Code,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}
