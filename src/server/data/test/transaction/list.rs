use super::*;

/// Tests listing all transactions.
///
/// Verifies ordering by date descending.
///
/// Expected: Ok(Vec<Transaction>) newest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, account) = factory::helpers::create_user_with_account(db).await?;

    let old = TransactionFactory::new(db, &account.id, &user.id)
        .date(2024, 12, 31)
        .build()
        .await?;
    let newest = TransactionFactory::new(db, &account.id, &user.id)
        .date(2025, 3, 11)
        .build()
        .await?;
    let middle = TransactionFactory::new(db, &account.id, &user.id)
        .date(2025, 3, 10)
        .build()
        .await?;

    let repo = TransactionRepository::new(db);
    let ids: Vec<String> = repo
        .list(TransactionFilter::default())
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    assert_eq!(ids, vec![newest.id, middle.id, old.id]);

    Ok(())
}

/// Tests the inclusive date range filter.
///
/// Verifies that bookings on the first and last day of the month are included and
/// neighbouring months are excluded.
///
/// Expected: Ok(Vec<Transaction>) with the two March bookings
#[tokio::test]
async fn filters_by_inclusive_month_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, account) = factory::helpers::create_user_with_account(db).await?;

    for (m, d) in [(2, 28), (3, 1), (3, 31), (4, 1)] {
        TransactionFactory::new(db, &account.id, &user.id)
            .date(2025, m, d)
            .build()
            .await?;
    }

    let repo = TransactionRepository::new(db);
    let filter = TransactionFilter::from_query(Some(2025), Some(3))?;
    let dates: Vec<NaiveDate> = repo
        .list(filter)
        .await?
        .into_iter()
        .map(|t| t.date)
        .collect();

    assert_eq!(dates, vec![date(2025, 3, 31), date(2025, 3, 1)]);

    Ok(())
}

/// Tests chronological listing for reports.
///
/// Expected: Ok(Vec<Transaction>) in ascending date order limited to the year
#[tokio::test]
async fn lists_year_chronologically() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, account) = factory::helpers::create_user_with_account(db).await?;

    for (y, m, d) in [(2025, 12, 31), (2026, 1, 1), (2025, 1, 1), (2025, 6, 15)] {
        TransactionFactory::new(db, &account.id, &user.id)
            .date(y, m, d)
            .build()
            .await?;
    }

    let repo = TransactionRepository::new(db);
    let dates: Vec<NaiveDate> = repo
        .list_chronological(DateRange::year(2025)?)
        .await?
        .into_iter()
        .map(|t| t.date)
        .collect();

    assert_eq!(
        dates,
        vec![date(2025, 1, 1), date(2025, 6, 15), date(2025, 12, 31)]
    );

    Ok(())
}
