use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::account::EntryType,
    server::{
        data::account::AccountRepository,
        error::AppError,
        model::{
            account::UpsertAccountParam,
            transaction::{TransactionFilter, UpsertTransactionParam},
        },
        service::transaction::TransactionService,
    },
};

fn param(account_id: &str) -> UpsertTransactionParam {
    UpsertTransactionParam {
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        description: "Fahrstunde".to_string(),
        entry_type: EntryType::Income,
        amount: 95.0,
        account_id: account_id.to_string(),
        payment_method: None,
        remarks: None,
    }
}

/// Tests that reads carry the current account name.
///
/// Verifies that renaming an account is reflected in existing transactions and that a
/// deleted account leaves the name empty.
///
/// Expected: name follows the account, then None
#[tokio::test]
async fn account_name_resolved_on_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, account) = factory::helpers::create_user_with_account(db).await?;

    let service = TransactionService::new(db);
    let created = service.create(param(&account.id), &user.id).await?;
    assert_eq!(created.account_name.as_deref(), Some(account.name.as_str()));

    let accounts = AccountRepository::new(db);
    accounts
        .update(
            &account.id,
            UpsertAccountParam {
                name: "Einnahmen Fahrstunden".to_string(),
                account_type: EntryType::Income,
                category: None,
            },
        )
        .await?;

    let listed = service.list(TransactionFilter::default()).await?;
    assert_eq!(listed[0].account_name.as_deref(), Some("Einnahmen Fahrstunden"));

    accounts.delete(&account.id).await?;
    let orphan = service.get(&created.id).await?;
    assert_eq!(orphan.account_name, None);

    Ok(())
}

/// Tests booking on an unknown account.
///
/// Expected: Err(AppError::Validation) on create and on update
#[tokio::test]
async fn unknown_account_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, account) = factory::helpers::create_user_with_account(db).await?;

    let service = TransactionService::new(db);
    let created = service.create(param(&account.id), &user.id).await?;

    let create = service.create(param("missing"), &user.id).await;
    let update = service.update(&created.id, param("missing")).await;

    assert!(matches!(create, Err(AppError::Validation(_))));
    assert!(matches!(update, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests update and delete of a missing transaction.
///
/// Expected: Err(AppError::NotFound) for both, including a second delete
#[tokio::test]
async fn missing_transaction_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, account) = factory::helpers::create_user_with_account(db).await?;

    let service = TransactionService::new(db);
    let created = service.create(param(&account.id), &user.id).await?;
    service.delete(&created.id).await?;

    let update = service.update(&created.id, param(&account.id)).await;
    let delete = service.delete(&created.id).await;

    assert!(matches!(update, Err(AppError::NotFound(_))));
    assert!(matches!(delete, Err(AppError::NotFound(_))));

    Ok(())
}
