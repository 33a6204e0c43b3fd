use super::*;

/// Tests creating a user.
///
/// Verifies that the repository stores the role, status and password hash it is
/// given and returns the created user.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            CreateUserParams {
                email: "finance@example.com".to_string(),
                name: "Finance Lead".to_string(),
                password: "ignored".to_string(),
                role: UserRole::SuperAdmin,
                status: Status::Active,
            },
            "stored-hash".to_string(),
        )
        .await?;

    assert_eq!(user.email, "finance@example.com");
    assert_eq!(user.role, UserRole::SuperAdmin);
    assert_eq!(user.status, Status::Active);
    assert_eq!(user.password_hash, "stored-hash");

    Ok(())
}

/// Tests creating a user with a registered email.
///
/// Verifies that the unique index on email rejects a second user with the
/// same address.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(
            CreateUserParams {
                email: "taken@example.com".to_string(),
                name: "Someone Else".to_string(),
                password: "ignored".to_string(),
                role: UserRole::User,
                status: Status::Active,
            },
            "stored-hash".to_string(),
        )
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
