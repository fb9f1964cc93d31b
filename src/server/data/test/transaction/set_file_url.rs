use super::*;

/// Tests attaching a file URL to a transaction.
///
/// Expected: Ok(true) and the URL is visible on reload
#[tokio::test]
async fn stores_file_url() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, account) = factory::helpers::create_user_with_account(db).await?;
    let tx = factory::transaction::create_transaction(db, &account.id, &user.id).await?;

    let repo = TransactionRepository::new(db);
    assert!(repo.set_file_url(&tx.id, "/api/files/receipt.pdf").await?);
    assert!(!repo.set_file_url("missing", "/api/files/x").await?);

    let reloaded = repo.find_by_id(&tx.id).await?.unwrap();
    assert_eq!(reloaded.file_url.as_deref(), Some("/api/files/receipt.pdf"));

    Ok(())
}
