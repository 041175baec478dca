use super::*;

/// Tests that upcoming keeps active statuses and history keeps terminal
/// ones, with history newest-first.
#[tokio::test]
async fn upcoming_and_history_split_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, owner, vehicle) = create_booking_dependencies(db).await?;

    let pending = carsharing_booking(
        db,
        customer.id,
        vehicle.id,
        owner.id,
        BookingStatus::Pending,
        &interval(1, 2),
    )
    .await?;
    let confirmed = carsharing_booking(
        db,
        customer.id,
        vehicle.id,
        owner.id,
        BookingStatus::Confirmed,
        &interval(3, 4),
    )
    .await?;
    let completed = carsharing_booking(
        db,
        customer.id,
        vehicle.id,
        owner.id,
        BookingStatus::Completed,
        &interval(5, 6),
    )
    .await?;
    let canceled = carsharing_booking(
        db,
        customer.id,
        vehicle.id,
        owner.id,
        BookingStatus::Canceled,
        &interval(7, 8),
    )
    .await?;

    let repo = BookingRepository::new(db);

    let upcoming = repo.upcoming_for_user(customer.id).await?;
    let upcoming_ids: Vec<i32> = upcoming.iter().map(|b| b.id).collect();
    assert_eq!(upcoming_ids, vec![pending.id, confirmed.id]);

    let history = repo.history_for_user(customer.id, 20).await?;
    let history_ids: Vec<i32> = history.iter().map(|b| b.id).collect();
    assert_eq!(history_ids, vec![canceled.id, completed.id]);

    Ok(())
}

/// Tests that another user's bookings never leak into the listings.
#[tokio::test]
async fn listings_are_scoped_to_the_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, owner, vehicle) = create_booking_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    carsharing_booking(
        db,
        customer.id,
        vehicle.id,
        owner.id,
        BookingStatus::Pending,
        &interval(1, 2),
    )
    .await?;

    let repo = BookingRepository::new(db);
    assert!(repo.upcoming_for_user(stranger.id).await?.is_empty());
    assert!(repo.history_for_user(stranger.id, 20).await?.is_empty());

    Ok(())
}
