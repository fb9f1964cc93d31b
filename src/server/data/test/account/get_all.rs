use super::*;

/// Tests listing accounts.
///
/// Verifies ordering by name and parsing of the category tag.
///
/// Expected: Ok(Vec<Account>) sorted by name
#[tokio::test]
async fn returns_accounts_sorted_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::AccountFactory::new(db)
        .name("Einnahmen Theorie")
        .build()
        .await?;
    factory::account::AccountFactory::new(db)
        .name("Ausgaben Benzin")
        .account_type("expense")
        .build()
        .await?;
    factory::account::AccountFactory::new(db)
        .name("Einnahmen Fahrstunden")
        .category(Some("driving_lessons"))
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let accounts = repo.get_all().await?;
    let names: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["Ausgaben Benzin", "Einnahmen Fahrstunden", "Einnahmen Theorie"]
    );
    assert_eq!(accounts[1].category, Some(AccountCategory::DrivingLessons));
    assert!(accounts[1].is_driving_lessons());
    assert!(!accounts[2].is_driving_lessons());

    Ok(())
}

/// Tests an account row with an unknown type.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn unknown_stored_type_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::AccountFactory::new(db)
        .account_type("asset")
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    assert!(matches!(repo.get_all().await, Err(AppError::InternalErr(_))));

    Ok(())
}
