use super::*;

/// Reviews over ratings [5, 3, 4] roll the driver's rating up to exactly
/// 4.0 - a full recompute over all reviews, not a running average.
#[tokio::test]
async fn rating_rollup_is_the_exact_mean() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_user(db).await?;
    let driver = factory::user::create_driver(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, driver.id).build().await?;

    let service = ReviewService::new(db);
    for (offset, rating) in [(1, 5), (3, 3), (5, 4)] {
        let booking = carsharing_booking_with_status(
            db,
            customer.id,
            &vehicle,
            BookingStatus::Completed,
            offset,
        )
        .await?;
        service.submit(submit(booking.id, customer.id, rating)).await.unwrap();
    }

    let rated = UserRepository::new(db).get_by_id(driver.id).await?.unwrap();
    assert_eq!(rated.driver_rating, 4.0);
    // The detailing rating is untouched by carsharing reviews.
    assert_eq!(rated.detailing_rating, 5.0);

    Ok(())
}

/// A second review for the same booking is rejected.
#[tokio::test]
async fn second_review_for_same_booking_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_user(db).await?;
    let driver = factory::user::create_driver(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, driver.id).build().await?;
    let booking = carsharing_booking_with_status(
        db,
        customer.id,
        &vehicle,
        BookingStatus::Completed,
        1,
    )
    .await?;

    let service = ReviewService::new(db);
    service.submit(submit(booking.id, customer.id, 5)).await.unwrap();

    let again = service.submit(submit(booking.id, customer.id, 4)).await;
    assert!(matches!(again, Err(AppError::Validation(_))));

    Ok(())
}

/// Only completed bookings can be reviewed.
#[tokio::test]
async fn incomplete_booking_cannot_be_reviewed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_user(db).await?;
    let driver = factory::user::create_driver(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, driver.id).build().await?;
    let booking = carsharing_booking_with_status(
        db,
        customer.id,
        &vehicle,
        BookingStatus::Confirmed,
        1,
    )
    .await?;

    let result = ReviewService::new(db)
        .submit(submit(booking.id, customer.id, 5))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Reviewing someone else's booking is forbidden.
#[tokio::test]
async fn review_of_foreign_booking_is_forbidden() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let driver = factory::user::create_driver(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, driver.id).build().await?;
    let booking = carsharing_booking_with_status(
        db,
        customer.id,
        &vehicle,
        BookingStatus::Completed,
        1,
    )
    .await?;

    let result = ReviewService::new(db)
        .submit(submit(booking.id, stranger.id, 5))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Ratings outside 1..=5 are rejected before any lookup.
#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReviewService::new(db);
    for rating in [0, 6, -1] {
        let result = service.submit(submit(1, 1, rating)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}

/// A detailing review lands on the provider's detailing rating.
#[tokio::test]
async fn detailing_review_updates_detailing_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_user(db).await?;
    let provider = factory::user::create_provider(db, 42.6977, 23.3219, 20).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, customer.id).build().await?;
    let catalog_entry =
        test_utils::factory::detailing_service::DetailingServiceFactory::new(db).build().await?;

    let booking =
        completed_detailing_booking(db, customer.id, provider.id, vehicle.id, &catalog_entry)
            .await?;

    ReviewService::new(db)
        .submit(submit(booking.id, customer.id, 3))
        .await
        .unwrap();

    let rated = UserRepository::new(db).get_by_id(provider.id).await?.unwrap();
    assert_eq!(rated.detailing_rating, 3.0);
    assert_eq!(rated.driver_rating, 5.0);

    Ok(())
}

/// Bus seat bookings have no review target.
#[tokio::test]
async fn bus_seat_booking_is_not_reviewable() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_user(db).await?;
    let (_agency, route, seat) = factory::bus::create_bookable_seat(db).await?;
    let booking = completed_bus_booking(db, customer.id, &route, &seat).await?;

    let result = ReviewService::new(db)
        .submit(submit(booking.id, customer.id, 5))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
