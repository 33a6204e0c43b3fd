use super::*;

/// Tests a partial user update.
///
/// Verifies that only the given fields change and the password hash is kept
/// when no new hash is supplied.
///
/// Expected: Ok(Some) with the new role and status
#[tokio::test]
async fn updates_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("Original")
        .password_hash("original-hash")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            UpdateUserParams {
                id: created.id,
                role: Some(UserRole::SuperAdmin),
                status: Some(Status::Inactive),
                ..Default::default()
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Original");
    assert_eq!(updated.role, UserRole::SuperAdmin);
    assert_eq!(updated.status, Status::Inactive);
    assert_eq!(updated.password_hash, "original-hash");

    Ok(())
}

/// Tests updating a user that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(
            UpdateUserParams {
                id: 999,
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
            Some("new-hash".to_string()),
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
