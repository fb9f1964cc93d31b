use super::*;

/// Tests replacing an account.
///
/// Verifies that name, type and category are overwritten and that an unknown ID
/// yields `None`.
///
/// Expected: Ok(Some(Account)) then Ok(None)
#[tokio::test]
async fn updates_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::create_account(db).await?;

    let repo = AccountRepository::new(db);
    let param = UpsertAccountParam {
        name: "Einnahmen Fahrstunden".to_string(),
        account_type: EntryType::Income,
        category: Some(Some(AccountCategory::DrivingLessons)),
    };
    let updated = repo.update(&account.id, param.clone()).await?.unwrap();

    assert_eq!(updated.id, account.id);
    assert_eq!(updated.name, "Einnahmen Fahrstunden");
    assert_eq!(updated.category, Some(AccountCategory::DrivingLessons));
    assert!(repo.update("missing", param).await?.is_none());

    Ok(())
}

/// Tests deleting an account.
///
/// Expected: Ok(true), then the account no longer exists
#[tokio::test]
async fn deletes_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::create_account(db).await?;

    let repo = AccountRepository::new(db);
    assert!(repo.exists(&account.id).await?);
    assert!(repo.delete(&account.id).await?);
    assert!(!repo.exists(&account.id).await?);

    Ok(())
}
