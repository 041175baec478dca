use super::*;
use test_utils::factory::vehicle::VehicleFactory;

/// Tests that a free, approved, located vehicle inside the radius is
/// found.
#[tokio::test]
async fn finds_free_vehicle_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_driver(db).await?;
    let vehicle = VehicleFactory::new(db, owner.id).build().await?;

    let found = availability(db)
        .search_vehicles(&interval(1, 3), CENTER, None)
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, vehicle.id);

    Ok(())
}

/// Tests that unapproved and flag-unavailable vehicles never surface.
#[tokio::test]
async fn excludes_unapproved_and_unavailable_vehicles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_driver(db).await?;
    VehicleFactory::new(db, owner.id).approved(false).build().await?;
    VehicleFactory::new(db, owner.id).available(false).build().await?;

    let found = availability(db)
        .search_vehicles(&interval(1, 3), CENTER, None)
        .await
        .unwrap();

    assert!(found.is_empty());

    Ok(())
}

/// Tests that a vehicle without stored coordinates is dropped rather
/// than treated as matching anywhere.
#[tokio::test]
async fn excludes_unlocated_vehicles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_driver(db).await?;
    VehicleFactory::new(db, owner.id).location(None).build().await?;

    let found = availability(db)
        .search_vehicles(&interval(1, 3), CENTER, None)
        .await
        .unwrap();

    assert!(found.is_empty());

    Ok(())
}

/// Tests the radius bound: ~25 km out misses the 10 km default but is
/// caught by an explicit wider radius.
#[tokio::test]
async fn radius_bounds_the_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_driver(db).await?;
    let far = point_km_north(CENTER, 25.0);
    VehicleFactory::new(db, owner.id)
        .location(Some((far.latitude, far.longitude)))
        .build()
        .await?;

    let engine = availability(db);

    let with_default = engine
        .search_vehicles(&interval(1, 3), CENTER, None)
        .await
        .unwrap();
    assert!(with_default.is_empty());

    let with_wide = engine
        .search_vehicles(&interval(1, 3), CENTER, Some(50.0))
        .await
        .unwrap();
    assert_eq!(with_wide.len(), 1);

    Ok(())
}

/// Tests conflict filtering: overlap excludes, terminal statuses and
/// touching endpoints do not.
#[tokio::test]
async fn overlapping_booking_excludes_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_user(db).await?;
    let owner = factory::user::create_driver(db).await?;
    let vehicle = VehicleFactory::new(db, owner.id).build().await?;

    hold_vehicle(db, customer.id, &vehicle, BookingStatus::Confirmed, &interval(1, 4)).await?;

    let engine = availability(db);

    let overlapping = engine
        .search_vehicles(&interval(2, 3), CENTER, None)
        .await
        .unwrap();
    assert!(overlapping.is_empty());

    let touching = engine
        .search_vehicles(&interval(4, 6), CENTER, None)
        .await
        .unwrap();
    assert_eq!(touching.len(), 1);

    Ok(())
}

#[tokio::test]
async fn canceled_booking_does_not_block_the_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_user(db).await?;
    let owner = factory::user::create_driver(db).await?;
    let vehicle = VehicleFactory::new(db, owner.id).build().await?;

    hold_vehicle(db, customer.id, &vehicle, BookingStatus::Canceled, &interval(1, 4)).await?;

    let found = availability(db)
        .search_vehicles(&interval(2, 3), CENTER, None)
        .await
        .unwrap();

    assert_eq!(found.len(), 1);

    Ok(())
}

/// Tests that results keep pool insertion order - no distance sorting.
#[tokio::test]
async fn results_keep_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_driver(db).await?;
    let near = point_km_north(CENTER, 1.0);
    let farther = point_km_north(CENTER, 5.0);

    // Registered first but farther away.
    let first = VehicleFactory::new(db, owner.id)
        .location(Some((farther.latitude, farther.longitude)))
        .build()
        .await?;
    let second = VehicleFactory::new(db, owner.id)
        .location(Some((near.latitude, near.longitude)))
        .build()
        .await?;

    let found = availability(db)
        .search_vehicles(&interval(1, 3), CENTER, None)
        .await
        .unwrap();

    let ids: Vec<i32> = found.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
