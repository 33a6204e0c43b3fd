use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for a registered email, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("lookup@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("lookup@example.com").await?;
    let missing = repo.find_by_email("nobody@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));
    assert!(missing.is_none());

    Ok(())
}

/// Tests that an unknown stored role surfaces as an error.
///
/// Verifies that the entity conversion refuses role strings it does not know
/// instead of silently defaulting them.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .role("AUDITOR")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_id(created.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
