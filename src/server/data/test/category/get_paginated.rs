use super::*;

/// Tests listing categories alphabetically with a status filter.
///
/// Expected: Ok with the active categories in name order
#[tokio::test]
async fn lists_active_categories_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db).name("Travel").build().await?;
    factory::category::CategoryFactory::new(db).name("Equipment").build().await?;
    factory::category::CategoryFactory::new(db)
        .name("Catering")
        .status("INACTIVE")
        .build()
        .await?;

    let page = CategoryRepository::new(db)
        .get_paginated(
            CategoryFilter {
                status: Some(Status::Active),
                search: None,
            },
            PageRequest::default(),
        )
        .await?;

    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Equipment", "Travel"]);
    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests searching categories by a partial name.
///
/// Expected: Ok with only the matching category
#[tokio::test]
async fn searches_by_partial_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db).name("Software Licenses").build().await?;
    factory::category::CategoryFactory::new(db).name("Hardware").build().await?;

    let page = CategoryRepository::new(db)
        .get_paginated(
            CategoryFilter {
                status: None,
                search: Some("license".to_string()),
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Software Licenses");

    Ok(())
}

/// Tests that `%` and `_` in a search term match literally.
///
/// Expected: Ok with only the category containing "100%"
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db).name("100% Cotton").build().await?;
    factory::category::CategoryFactory::new(db).name("1000 Units").build().await?;
    factory::category::CategoryFactory::new(db).name("Office_Rent").build().await?;
    factory::category::CategoryFactory::new(db).name("Office Rent").build().await?;

    let repo = CategoryRepository::new(db);
    let percent = repo
        .get_paginated(
            CategoryFilter {
                status: None,
                search: Some("100%".to_string()),
            },
            PageRequest::default(),
        )
        .await?;
    let underscore = repo
        .get_paginated(
            CategoryFilter {
                status: None,
                search: Some("e_R".to_string()),
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(percent.total, 1);
    assert_eq!(percent.items[0].name, "100% Cotton");
    assert_eq!(underscore.total, 1);
    assert_eq!(underscore.items[0].name, "Office_Rent");

    Ok(())
}
