use super::*;

fn entry(month: u32, description: &str) -> UpsertServiceEntryParam {
    UpsertServiceEntryParam {
        date: NaiveDate::from_ymd_opt(2025, month, 1).unwrap(),
        description: description.to_string(),
        km_stand: Some(10_000 * month as i64),
    }
}

/// Tests listing a vehicle's service log.
///
/// Verifies scoping to the vehicle and ordering by date descending.
///
/// Expected: Ok(Vec<ServiceEntry>) newest first
#[tokio::test]
async fn lists_vehicle_log_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let golf = factory::vehicle::create_vehicle(db).await?;
    let polo = VehicleFactory::new(db).modell("Polo").build().await?;

    let repo = ServiceEntryRepository::new(db);
    repo.create(&golf.id, entry(2, "Ölwechsel"), "u1").await?;
    repo.create(&golf.id, entry(9, "Reifenwechsel"), "u1").await?;
    repo.create(&polo.id, entry(5, "MFK"), "u1").await?;

    let log = repo.get_by_vehicle(&golf.id).await?;
    let descriptions: Vec<&str> = log.iter().map(|e| e.description.as_str()).collect();

    assert_eq!(descriptions, vec!["Reifenwechsel", "Ölwechsel"]);
    assert_eq!(log[0].km_stand, Some(90_000));

    Ok(())
}

/// Tests listing vehicles.
///
/// Expected: Ok(Vec<Vehicle>) ordered by marke, then modell
#[tokio::test]
async fn vehicles_sorted_by_marke_and_modell() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    VehicleFactory::new(db).marke("VW").modell("Polo").build().await?;
    VehicleFactory::new(db).marke("Audi").modell("A3").build().await?;
    VehicleFactory::new(db).marke("VW").modell("Golf").build().await?;

    let repo = VehicleRepository::new(db);
    let names: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|v| format!("{} {}", v.marke, v.modell))
        .collect();

    assert_eq!(names, vec!["Audi A3", "VW Golf", "VW Polo"]);

    Ok(())
}
