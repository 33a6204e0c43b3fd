use super::*;

/// Tests granting and revoking access.
///
/// Expected: exists() follows grant and revoke; a second revoke returns false
#[tokio::test]
async fn grants_and_revokes_access() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;

    let repo = UserAccessRepository::new(db);
    assert!(!repo.exists(user.id, owner.id).await?);

    repo.grant(user.id, owner.id).await?;
    assert!(repo.exists(user.id, owner.id).await?);

    assert!(repo.revoke(user.id, owner.id).await?);
    assert!(!repo.revoke(user.id, owner.id).await?);
    assert!(!repo.exists(user.id, owner.id).await?);

    Ok(())
}

/// Tests granting the same access twice.
///
/// Verifies that the composite primary key rejects a duplicate pair.
///
/// Expected: Err on the second grant
#[tokio::test]
async fn rejects_duplicate_grant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;

    let repo = UserAccessRepository::new(db);
    repo.grant(user.id, owner.id).await?;

    assert!(repo.grant(user.id, owner.id).await.is_err());

    Ok(())
}
