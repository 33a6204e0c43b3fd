use super::*;

/// Tests super admin detection.
///
/// Verifies that only users with the SUPER_ADMIN role count, and that the
/// oldest super admin is returned first.
///
/// Expected: false before an admin exists, true afterwards
#[tokio::test]
async fn detects_super_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    factory::user::create_user(db).await?;

    assert!(!repo.super_admin_exists().await?);
    assert!(repo.find_first_super_admin().await?.is_none());

    let first = factory::user::create_admin(db).await?;
    factory::user::create_admin(db).await?;

    assert!(repo.super_admin_exists().await?);
    assert_eq!(
        repo.find_first_super_admin().await?.map(|u| u.id),
        Some(first.id)
    );

    Ok(())
}
