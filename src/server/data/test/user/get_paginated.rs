use super::*;

/// Tests paging through users.
///
/// Verifies that users come back ordered by name and the total counts every
/// user, not only the current page.
///
/// Expected: Ok with two users on the first page and a total of three
#[tokio::test]
async fn pages_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Charlie").build().await?;
    factory::user::UserFactory::new(db).name("Alice").build().await?;
    factory::user::UserFactory::new(db).name("Bob").build().await?;

    let page = UserRepository::new(db)
        .get_paginated(PageRequest::new(Some(1), Some(2), 20))
        .await?;

    let names: Vec<_> = page.items.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages(), 2);

    Ok(())
}

/// Tests listing every user without pagination.
///
/// Expected: Ok with all users on a single page
#[tokio::test]
async fn returns_all_users_when_unpaginated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::user::create_user(db).await?;
    }

    let page = UserRepository::new(db)
        .get_paginated(PageRequest::unpaginated())
        .await?;

    assert_eq!(page.items.len(), 3);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages(), 1);

    Ok(())
}
