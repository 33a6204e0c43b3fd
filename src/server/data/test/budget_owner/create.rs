use super::*;

/// Tests creating a budget owner.
///
/// Expected: Ok with name, code and status stored
#[tokio::test]
async fn creates_budget_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BudgetOwnerRepository::new(db);
    let owner = repo
        .create(CreateBudgetOwnerParams {
            name: "Information Technology".to_string(),
            code: Some("IT".to_string()),
            description: None,
            status: Status::Active,
        })
        .await?;

    assert_eq!(owner.name, "Information Technology");
    assert_eq!(owner.code.as_deref(), Some("IT"));
    assert_eq!(owner.status, Status::Active);

    let by_code = repo.find_by_code("IT").await?;
    assert_eq!(by_code.map(|o| o.id), Some(owner.id));

    Ok(())
}

/// Tests that several owners may omit a code.
///
/// Verifies that the unique index on code ignores NULL values.
///
/// Expected: Ok for both owners
#[tokio::test]
async fn allows_multiple_owners_without_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BudgetOwnerRepository::new(db);
    for name in ["Facilities", "Legal"] {
        repo.create(CreateBudgetOwnerParams {
            name: name.to_string(),
            code: None,
            description: None,
            status: Status::Active,
        })
        .await?;
    }

    let all = repo
        .get_paginated(
            &OwnerScope::All,
            BudgetOwnerFilter::default(),
            PageRequest::unpaginated(),
        )
        .await?;
    assert_eq!(all.total, 2);

    Ok(())
}
