use super::*;
use crate::server::{
    model::user::{CreateUserParams, UpdateUserParams},
    service::user::UserService,
};

fn create_params(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        name: "New User".to_string(),
        password: "password123".to_string(),
        role: UserRole::User,
        status: Status::Active,
    }
}

/// Tests creating a user through the service.
///
/// Verifies that the email is normalized and the password is stored hashed.
///
/// Expected: Ok(User) with a lower-case email and an argon2 hash
#[tokio::test]
async fn creates_user_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .create(create_params("New.User@Example.com"))
        .await?;

    assert_eq!(user.email, "new.user@example.com");
    assert!(user.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests creating a user with a registered email in another case.
///
/// Expected: Err(AppError::Duplicate)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service.create(create_params("dup@example.com")).await?;

    let result = service.create(create_params("DUP@example.com")).await;

    assert!(matches!(result, Err(AppError::Duplicate(_))));

    Ok(())
}

/// Tests password and email validation.
///
/// Expected: Err(AppError::Validation) for a short password and a malformed email
#[tokio::test]
async fn validates_password_and_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    let short_password = service
        .create(CreateUserParams {
            password: "short".to_string(),
            ..create_params("short@example.com")
        })
        .await;
    let bad_email = service.create(create_params("not-an-email")).await;

    assert!(matches!(short_password, Err(AppError::Validation(_))));
    assert!(matches!(bad_email, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that a super admin cannot demote or deactivate themselves.
///
/// Expected: Err(AppError::Validation) for both changes
#[tokio::test]
async fn prevents_self_lock_out() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let service = UserService::new(db);

    let demote = service
        .update(
            UpdateUserParams {
                id: admin.id,
                role: Some(UserRole::User),
                ..Default::default()
            },
            admin.id,
        )
        .await;
    let deactivate = service
        .update(
            UpdateUserParams {
                id: admin.id,
                status: Some(Status::Inactive),
                ..Default::default()
            },
            admin.id,
        )
        .await;

    assert!(matches!(demote, Err(AppError::Validation(_))));
    assert!(matches!(deactivate, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests deleting users.
///
/// Verifies that a user without records can be deleted, while a user who
/// created transactions and the caller themselves cannot.
///
/// Expected: Ok(true) for the unused account, Err(AppError::Validation) otherwise
#[tokio::test]
async fn deletes_only_users_without_records() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let unused = factory::user::create_user(db).await?;
    let (creator, _, _, _) = factory::helpers::create_transaction_with_dependencies(db).await?;

    let service = UserService::new(db);

    assert!(service.delete(unused.id, admin.id).await?);
    assert!(!service.delete(unused.id, admin.id).await?);
    assert!(matches!(
        service.delete(creator.id, admin.id).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.delete(admin.id, admin.id).await,
        Err(AppError::Validation(_))
    ));

    Ok(())
}
