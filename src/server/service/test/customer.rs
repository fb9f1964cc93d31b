use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::customer::CreateCustomerRemarkParam,
    service::customer::CustomerService,
};

fn remark(customer_id: &str) -> CreateCustomerRemarkParam {
    CreateCustomerRemarkParam {
        customer_id: customer_id.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        remarks: "Prüfung bestanden".to_string(),
        user_id: "u1".to_string(),
    }
}

/// Tests adding a remark for an unknown customer.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn remark_requires_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomerService::new(db).add_remark(remark("missing")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a customer with remarks.
///
/// Expected: Ok, then listing remarks of the deleted customer is NotFound
#[tokio::test]
async fn delete_removes_remarks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let customer = factory::create_customer(db).await?;

    let service = CustomerService::new(db);
    service.add_remark(remark(&customer.id)).await?;
    assert_eq!(service.list_remarks(&customer.id).await?.len(), 1);

    service.delete(&customer.id).await?;

    assert!(matches!(
        service.list_remarks(&customer.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(service.list(None).await?.is_empty());

    Ok(())
}
