use super::*;

/// The happy path walks pending -> confirmed -> completed.
#[tokio::test]
async fn pending_confirm_complete_flow() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, vehicle) = carsharing_fixture(db).await?;
    let locks = ResourceLocks::new();
    let service = booking_service(db, &locks);

    let booking = service
        .create_carsharing(carsharing_params(customer.id, vehicle.id, 1, Some(3)))
        .await
        .unwrap();

    let confirmed = service.confirm(booking.id).await.unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let completed = service.complete(booking.id).await.unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);

    Ok(())
}

/// Completing a pending booking skips confirmation and is rejected.
#[tokio::test]
async fn pending_booking_cannot_complete_directly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, vehicle) = carsharing_fixture(db).await?;
    let locks = ResourceLocks::new();
    let service = booking_service(db, &locks);

    let booking = service
        .create_carsharing(carsharing_params(customer.id, vehicle.id, 1, Some(3)))
        .await
        .unwrap();

    let result = service.complete(booking.id).await;
    assert!(matches!(
        result,
        Err(AppError::InvalidTransition {
            from: BookingStatus::Pending,
            to: BookingStatus::Completed,
        })
    ));

    Ok(())
}

/// A detailing job can be started (in progress) and then completed.
#[tokio::test]
async fn confirmed_booking_can_start_then_complete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, vehicle) = carsharing_fixture(db).await?;
    let locks = ResourceLocks::new();
    let service = booking_service(db, &locks);

    let booking = service
        .create_carsharing(carsharing_params(customer.id, vehicle.id, 1, Some(3)))
        .await
        .unwrap();
    service.confirm(booking.id).await.unwrap();

    let started = service.start(booking.id).await.unwrap();
    assert_eq!(started.status, BookingStatus::InProgress);

    let completed = service.complete(booking.id).await.unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);

    Ok(())
}

#[tokio::test]
async fn confirm_of_confirmed_booking_is_a_transition_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, vehicle) = carsharing_fixture(db).await?;
    let locks = ResourceLocks::new();
    let service = booking_service(db, &locks);

    let booking = service
        .create_carsharing(carsharing_params(customer.id, vehicle.id, 1, Some(3)))
        .await
        .unwrap();
    service.confirm(booking.id).await.unwrap();

    let result = service.confirm(booking.id).await;
    assert!(matches!(result, Err(AppError::InvalidTransition { .. })));

    Ok(())
}

/// Active bookings show under upcoming; canceling moves them to
/// history.
#[tokio::test]
async fn upcoming_and_history_track_the_lifecycle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, vehicle) = carsharing_fixture(db).await?;
    let locks = ResourceLocks::new();
    let service = booking_service(db, &locks);

    let booking = service
        .create_carsharing(carsharing_params(customer.id, vehicle.id, 1, Some(3)))
        .await
        .unwrap();

    let upcoming = service.upcoming_for_user(customer.id).await.unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, booking.id);
    assert!(service.history_for_user(customer.id).await.unwrap().is_empty());

    service.cancel(booking.id, customer.id).await.unwrap();

    assert!(service.upcoming_for_user(customer.id).await.unwrap().is_empty());
    let history = service.history_for_user(customer.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, BookingStatus::Canceled);

    Ok(())
}

#[tokio::test]
async fn confirm_of_unknown_booking_is_not_found() {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let locks = ResourceLocks::new();
    let service = booking_service(db, &locks);

    let result = service.confirm(4711).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
