pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_budget_owner_table;
mod m20250601_000003_create_category_table;
mod m20250601_000004_create_budget_table;
mod m20250601_000005_create_transaction_table;
mod m20250601_000006_create_user_access_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_budget_owner_table::Migration),
            Box::new(m20250601_000003_create_category_table::Migration),
            Box::new(m20250601_000004_create_budget_table::Migration),
            Box::new(m20250601_000005_create_transaction_table::Migration),
            Box::new(m20250601_000006_create_user_access_table::Migration),
        ]
    }
}
