use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::service_entry::ServiceEntryRepository,
    error::AppError,
    model::vehicle::UpsertServiceEntryParam,
    service::vehicle::VehicleService,
};

fn entry() -> UpsertServiceEntryParam {
    UpsertServiceEntryParam {
        date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
        description: "Grosser Service".to_string(),
        km_stand: Some(45_000),
    }
}

/// Tests adding a service entry to an unknown vehicle.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn service_entry_requires_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VehicleService::new(db)
        .add_service_entry("missing", entry(), "u1")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a vehicle with a service log.
///
/// Expected: vehicle and entries gone, a second delete is NotFound
#[tokio::test]
async fn delete_removes_service_log() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let vehicle = factory::create_vehicle(db).await?;

    let service = VehicleService::new(db);
    let created = service.add_service_entry(&vehicle.id, entry(), "u1").await?;
    service.delete(&vehicle.id).await?;

    assert!(!ServiceEntryRepository::new(db).exists(&created.id).await?);
    assert!(matches!(
        service.delete(&vehicle.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
