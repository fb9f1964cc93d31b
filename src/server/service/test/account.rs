use test_utils::{
    builder::TestBuilder,
    factory::{account::AccountFactory, transaction::TransactionFactory, user::create_user},
};

use crate::{
    model::account::UpsertAccountDto,
    server::{
        error::AppError, model::account::UpsertAccountParam, service::account::AccountService,
        service::report::ReportService,
    },
};

/// Tests renaming the driving lesson account with a body that omits `category`.
///
/// Verifies that the stored tag survives, so lesson statistics keep counting.
///
/// Expected: tag kept and fahrstunden_count stays 1
#[tokio::test]
async fn update_without_category_keeps_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let lessons = AccountFactory::new(db)
        .name("Einnahmen Fahrstunden")
        .category(Some("driving_lessons"))
        .build()
        .await?;
    TransactionFactory::new(db, &lessons.id, &user.id)
        .date(2025, 3, 10)
        .amount(90.0)
        .build()
        .await?;

    let dto: UpsertAccountDto =
        serde_json::from_str(r#"{"name":"Einnahmen Fahrstunden B","type":"income"}"#).unwrap();
    let updated = AccountService::new(db)
        .update(&lessons.id, UpsertAccountParam::from_dto(dto)?)
        .await?;

    assert_eq!(updated.name, "Einnahmen Fahrstunden B");
    assert!(updated.is_driving_lessons());

    let stats = ReportService::new(db).statistics(2025).await?;
    assert_eq!(stats.fahrstunden_count, 1);

    Ok(())
}

/// Tests clearing the tag with an explicit `null`.
///
/// Expected: account no longer counts as driving lessons
#[tokio::test]
async fn update_with_null_category_clears_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lessons = AccountFactory::new(db)
        .name("Einnahmen Fahrstunden")
        .category(Some("driving_lessons"))
        .build()
        .await?;

    let dto: UpsertAccountDto = serde_json::from_str(
        r#"{"name":"Einnahmen Fahrstunden","type":"income","category":null}"#,
    )
    .unwrap();
    let updated = AccountService::new(db)
        .update(&lessons.id, UpsertAccountParam::from_dto(dto)?)
        .await?;

    assert_eq!(updated.category, None);

    Ok(())
}
