use super::*;

/// Tests batched account lookup.
///
/// Verifies that only existing IDs appear in the returned map and that an empty ID
/// list returns an empty map without querying.
///
/// Expected: Ok(HashMap) with the two existing accounts
#[tokio::test]
async fn returns_existing_accounts_keyed_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::account::create_account(db).await?;
    let b = factory::account::AccountFactory::new(db)
        .account_type("expense")
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let found = repo
        .find_by_ids(&[a.id.clone(), b.id.clone(), "gone".to_string()])
        .await?;

    assert_eq!(found.len(), 2);
    assert_eq!(found[&a.id].name, a.name);
    assert_eq!(found[&b.id].account_type, EntryType::Expense);
    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}
