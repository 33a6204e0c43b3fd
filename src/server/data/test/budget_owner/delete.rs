use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting an owner cascades.
///
/// Verifies that the owner's budgets, transactions and access grants are
/// removed together with it.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn cascades_to_dependent_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, owner, category, _) =
        factory::helpers::create_transaction_with_dependencies(db).await?;
    factory::budget::create_budget(db, owner.id, user.id).await?;
    factory::user_access::create_user_access(db, user.id, owner.id).await?;

    let deleted = BudgetOwnerRepository::new(db).delete(owner.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Budget::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Transaction::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserAccess::find().count(db).await?, 0);
    assert!(entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
