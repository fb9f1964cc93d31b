use super::*;

fn remark(customer_id: &str, day: u32) -> CreateCustomerRemarkParam {
    CreateCustomerRemarkParam {
        customer_id: customer_id.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
        remarks: format!("Lektion am {}.", day),
        user_id: "u1".to_string(),
    }
}

/// Tests listing remarks of one customer.
///
/// Verifies that remarks are scoped to the customer and ordered most recent first.
///
/// Expected: Ok(Vec<CustomerRemark>) for the customer, date descending
#[tokio::test]
async fn lists_customer_remarks_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let other = factory::customer::create_customer(db).await?;

    let repo = CustomerRemarkRepository::new(db);
    repo.create(remark(&customer.id, 3)).await?;
    repo.create(remark(&customer.id, 20)).await?;
    repo.create(remark(&other.id, 10)).await?;

    let remarks = repo.get_by_customer(&customer.id).await?;

    assert_eq!(remarks.len(), 2);
    assert_eq!(remarks[0].remarks, "Lektion am 20.");
    assert_eq!(remarks[1].remarks, "Lektion am 3.");

    Ok(())
}

/// Tests removing all remarks of a customer.
///
/// Expected: Ok(2) and the other customer's remark remains
#[tokio::test]
async fn deletes_remarks_by_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let other = factory::customer::create_customer(db).await?;

    let repo = CustomerRemarkRepository::new(db);
    repo.create(remark(&customer.id, 1)).await?;
    repo.create(remark(&customer.id, 2)).await?;
    repo.create(remark(&other.id, 3)).await?;

    assert_eq!(repo.delete_by_customer(&customer.id).await?, 2);
    assert_eq!(repo.get_by_customer(&other.id).await?.len(), 1);

    Ok(())
}
