use super::*;
use test_utils::factory::{
    bus::create_bookable_seat, detailing_service::DetailingServiceFactory,
    vehicle::VehicleFactory,
};

use crate::error::AppError;

/// Hourly 10 / daily 50: two hours quotes 20.00, thirty hours quotes
/// 100.00, and quoting twice returns the same number.
#[tokio::test]
async fn vehicle_quote_matches_rate_schedule_and_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_driver(db).await?;
    let vehicle = VehicleFactory::new(db, owner.id).build().await?;

    let engine = availability(db);

    let short = interval(1, 3);
    let first = engine.quote_vehicle(vehicle.id, &short).await.unwrap();
    let second = engine.quote_vehicle(vehicle.id, &short).await.unwrap();
    assert_eq!(first, Decimal::new(2000, 2));
    assert_eq!(first, second);

    let long = interval(0, 30);
    let daily = engine.quote_vehicle(vehicle.id, &long).await.unwrap();
    assert_eq!(daily, Decimal::new(10000, 2));

    Ok(())
}

#[tokio::test]
async fn unknown_vehicle_quote_is_not_found() {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = availability(db).quote_vehicle(4711, &interval(1, 3)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Detailing and bus quotes are flat prices from the catalog.
#[tokio::test]
async fn service_and_route_quotes_are_flat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DetailingServiceFactory::new(db)
        .base_price(Decimal::new(4500, 2))
        .build()
        .await?;
    let (_agency, route, _seat) = create_bookable_seat(db).await?;

    let engine = availability(db);

    assert_eq!(
        engine.quote_service(service.id).await.unwrap(),
        Decimal::new(4500, 2)
    );
    assert_eq!(engine.quote_route(route.id).await.unwrap(), route.price);

    Ok(())
}

/// The catalog listing resolves translated names for the requested
/// language.
#[tokio::test]
async fn service_listing_resolves_translations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    DetailingServiceFactory::new(db)
        .name(r#"{"en":"Exterior wash","bg":"Външно измиване"}"#)
        .build()
        .await?;
    DetailingServiceFactory::new(db).active(false).build().await?;

    let listed = availability(db).list_services("bg").await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Външно измиване");

    Ok(())
}
