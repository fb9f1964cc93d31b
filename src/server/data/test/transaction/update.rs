use super::*;

/// Tests replacing a transaction.
///
/// Verifies that all editable fields change while the creator is kept.
///
/// Expected: Ok(Some(Transaction)) with new values and the original user_id
#[tokio::test]
async fn replaces_fields_and_keeps_creator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, account) = factory::helpers::create_user_with_account(db).await?;
    let other = factory::account::create_account(db).await?;

    let tx = factory::transaction::create_transaction(db, &account.id, &user.id).await?;

    let repo = TransactionRepository::new(db);
    let updated = repo
        .update(
            &tx.id,
            UpsertTransactionParam {
                date: date(2025, 5, 2),
                description: "Tankfüllung".to_string(),
                entry_type: EntryType::Expense,
                amount: 88.4,
                account_id: other.id.clone(),
                payment_method: Some(PaymentMethod::Kreditkarte),
                remarks: Some("Shell".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.description, "Tankfüllung");
    assert_eq!(updated.entry_type, EntryType::Expense);
    assert_eq!(updated.amount, 88.4);
    assert_eq!(updated.account_id, other.id);
    assert_eq!(updated.payment_method, Some(PaymentMethod::Kreditkarte));
    assert_eq!(updated.user_id, user.id);

    Ok(())
}

/// Tests updating and deleting an unknown transaction.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn unknown_id_is_reported() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransactionRepository::new(db);
    let param = UpsertTransactionParam {
        date: date(2025, 1, 1),
        description: String::new(),
        entry_type: EntryType::Income,
        amount: 1.0,
        account_id: "a".to_string(),
        payment_method: None,
        remarks: None,
    };

    assert!(repo.update("missing", param).await?.is_none());
    assert!(!repo.delete("missing").await?);

    Ok(())
}
