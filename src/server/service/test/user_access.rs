use super::*;
use crate::server::{model::scope::OwnerScope, service::user_access::UserAccessService};

/// Tests scope resolution by role.
///
/// Verifies that super admins see everything and ordinary users see only
/// their granted owners.
///
/// Expected: OwnerScope::All for the admin, OwnerScope::Only for the user
#[tokio::test]
async fn resolves_scope_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = as_user(factory::user::create_admin(db).await?);
    let user = as_user(factory::user::create_user(db).await?);
    let owner = factory::budget_owner::create_budget_owner(db).await?;
    factory::budget_owner::create_budget_owner(db).await?;
    factory::user_access::create_user_access(db, user.id, owner.id).await?;

    let service = UserAccessService::new(db);

    assert_eq!(service.scope_for(&admin).await?, OwnerScope::All);
    assert_eq!(
        service.scope_for(&user).await?,
        OwnerScope::Only(vec![owner.id])
    );

    Ok(())
}

/// Tests granting access twice and to missing records.
///
/// Expected: Err(AppError::Duplicate) for the repeat grant and
/// Err(AppError::NotFound) for a missing owner or user
#[tokio::test]
async fn validates_grants() -> Result<(), AppError> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let owner = factory::budget_owner::create_budget_owner(db).await?;

    let service = UserAccessService::new(db);
    let granted = service.grant(user.id, owner.id).await?;
    assert_eq!(granted.id, owner.id);

    assert!(matches!(
        service.grant(user.id, owner.id).await,
        Err(AppError::Duplicate(_))
    ));
    assert!(matches!(
        service.grant(user.id, 999).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.grant(999, owner.id).await,
        Err(AppError::NotFound(_))
    ));

    assert_eq!(service.list(user.id).await?.map(|o| o.len()), Some(1));
    assert!(service.list(999).await?.is_none());

    Ok(())
}
