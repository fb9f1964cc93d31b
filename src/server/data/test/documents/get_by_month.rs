use super::*;

/// Tests listing bank documents of a month.
///
/// Verifies that documents are selected by their filing month, not their date, and
/// ordered most recent first.
///
/// Expected: Ok(Vec<BankDocument>) for 2025-03 only
#[tokio::test]
async fn bank_documents_scoped_to_filing_month() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let march = YearMonth::parse("2025-03")?;
    let april = YearMonth::parse("2025-04")?;
    let repo = BankDocumentRepository::new(db);

    for (day, month) in [(5, march), (28, march), (2, april)] {
        repo.create(CreateBankDocumentParam {
            // Statement for March arriving in April is still filed under March.
            date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            month,
            user_id: "u1".to_string(),
        })
        .await?;
    }

    let docs = repo.get_by_month(march).await?;

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].date.to_string(), "2025-04-28");
    assert!(docs.iter().all(|d| d.month == march));

    Ok(())
}

/// Tests moving a misc item to another month.
///
/// Expected: the item disappears from the old month and appears in the new one
#[tokio::test]
async fn misc_item_update_moves_month() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let march = YearMonth::parse("2025-03")?;
    let april = YearMonth::parse("2025-04")?;
    let repo = MiscItemRepository::new(db);

    let item = repo
        .create(
            UpsertMiscItemParam {
                date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                month: march,
                remarks: "Parkbusse".to_string(),
            },
            "u1",
        )
        .await?;

    let updated = repo
        .update(
            &item.id,
            UpsertMiscItemParam {
                date: item.date,
                month: april,
                remarks: "Parkbusse bezahlt".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.month, april);
    assert!(repo.get_by_month(march).await?.is_empty());
    assert_eq!(repo.get_by_month(april).await?.len(), 1);

    Ok(())
}
