use super::*;

/// Tests creating a category and finding it by name in any case.
///
/// Expected: Ok, and the case-insensitive lookup returns the same category
#[tokio::test]
async fn creates_and_finds_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let created = repo
        .create(CreateCategoryParams {
            name: "Office Supplies".to_string(),
            description: Some("Paper and toner".to_string()),
            status: Status::Active,
        })
        .await?;

    let found = repo.find_by_name_ignore_case("OFFICE supplies").await?;
    let missing = repo.find_by_name_ignore_case("Travel").await?;

    assert_eq!(found.map(|c| c.id), Some(created.id));
    assert!(missing.is_none());

    Ok(())
}
