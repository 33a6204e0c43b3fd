use super::*;

/// Tests listing a user's granted owners.
///
/// Verifies that only the user's own grants are returned, ordered by owner
/// name, and that the ID list matches.
///
/// Expected: Ok with the two granted owners
#[tokio::test]
async fn lists_granted_owners_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other_user = factory::user::create_user(db).await?;
    let zeta = factory::budget_owner::BudgetOwnerFactory::new(db)
        .name("Zeta")
        .build()
        .await?;
    let alpha = factory::budget_owner::BudgetOwnerFactory::new(db)
        .name("Alpha")
        .build()
        .await?;
    let unrelated = factory::budget_owner::create_budget_owner(db).await?;

    factory::user_access::create_user_access(db, user.id, zeta.id).await?;
    factory::user_access::create_user_access(db, user.id, alpha.id).await?;
    factory::user_access::create_user_access(db, other_user.id, unrelated.id).await?;

    let repo = UserAccessRepository::new(db);
    let owners = repo.owners_for_user(user.id).await?;
    let mut ids = repo.owner_ids_for_user(user.id).await?;
    ids.sort();

    let names: Vec<_> = owners.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);

    let mut expected = vec![zeta.id, alpha.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}
