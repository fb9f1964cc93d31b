use super::*;

/// Tests listing customers.
///
/// Verifies ordering by last name then first name.
///
/// Expected: Ok(Vec<Customer>) sorted by (name, vorname)
#[tokio::test]
async fn sorts_by_name_then_vorname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, vorname) in [("Meier", "Urs"), ("Abt", "Lea"), ("Meier", "Anna")] {
        CustomerFactory::new(db)
            .name(name)
            .vorname(vorname)
            .build()
            .await?;
    }

    let repo = CustomerRepository::new(db);
    let names: Vec<(String, String)> = repo
        .get_all(None)
        .await?
        .into_iter()
        .map(|c| (c.name, c.vorname))
        .collect();

    assert_eq!(
        names,
        vec![
            ("Abt".to_string(), "Lea".to_string()),
            ("Meier".to_string(), "Anna".to_string()),
            ("Meier".to_string(), "Urs".to_string()),
        ]
    );

    Ok(())
}

/// Tests the active filter.
///
/// Expected: only active customers for `Some(true)`, only inactive for `Some(false)`
#[tokio::test]
async fn filters_by_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::customer::create_customer(db).await?;
    let inactive = CustomerFactory::new(db).active(false).build().await?;

    let repo = CustomerRepository::new(db);
    let only_active = repo.get_all(Some(true)).await?;
    let only_inactive = repo.get_all(Some(false)).await?;

    assert_eq!(only_active.len(), 1);
    assert_eq!(only_active[0].id, active.id);
    assert_eq!(only_inactive.len(), 1);
    assert_eq!(only_inactive[0].id, inactive.id);
    assert_eq!(repo.get_all(None).await?.len(), 2);

    Ok(())
}
