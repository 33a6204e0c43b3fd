use super::*;

/// Tests renaming a category and clearing its description.
///
/// Expected: Ok(Some) with the new name and no description
#[tokio::test]
async fn renames_and_clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .description(Some("Old"))
        .build()
        .await?;

    let updated = CategoryRepository::new(db)
        .update(UpdateCategoryParams {
            id: category.id,
            name: Some("Renamed".to_string()),
            description: Some(None),
            status: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, None);
    assert_eq!(updated.status, Status::Active);

    Ok(())
}
