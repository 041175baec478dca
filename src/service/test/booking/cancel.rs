use super::*;
use test_utils::factory::bus::create_bookable_seat;

use crate::{config::BookingPolicy, data::bus::BusRepository};

/// The requester can cancel a pending booking; with the default policy
/// the vehicle stays held afterwards.
#[tokio::test]
async fn cancel_keeps_vehicle_held_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, vehicle) = carsharing_fixture(db).await?;
    let locks = ResourceLocks::new();
    let service = booking_service(db, &locks);

    let booking = service
        .create_carsharing(carsharing_params(customer.id, vehicle.id, 1, Some(3)))
        .await
        .unwrap();

    let canceled = service.cancel(booking.id, customer.id).await.unwrap();
    assert_eq!(canceled.status, BookingStatus::Canceled);

    let held = VehicleRepository::new(db).get_by_id(vehicle.id).await?.unwrap();
    assert!(!held.is_available);

    Ok(())
}

/// With the release policy on, cancellation restores the vehicle flag in
/// the same transaction.
#[tokio::test]
async fn release_policy_restores_vehicle_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, vehicle) = carsharing_fixture(db).await?;
    let locks = ResourceLocks::new();
    let policy = BookingPolicy {
        release_resources_on_cancel: true,
        ..Default::default()
    };
    let service = booking_service_with_policy(db, &locks, policy);

    let booking = service
        .create_carsharing(carsharing_params(customer.id, vehicle.id, 1, Some(3)))
        .await
        .unwrap();
    service.cancel(booking.id, customer.id).await.unwrap();

    let released = VehicleRepository::new(db).get_by_id(vehicle.id).await?.unwrap();
    assert!(released.is_available);

    Ok(())
}

/// The release policy also frees a bus seat.
#[tokio::test]
async fn release_policy_restores_bus_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::user::create_user(db).await?;
    let (_agency, _route, seat) = create_bookable_seat(db).await?;
    let locks = ResourceLocks::new();
    let policy = BookingPolicy {
        release_resources_on_cancel: true,
        ..Default::default()
    };
    let service = booking_service_with_policy(db, &locks, policy);

    let booking = service
        .create_bus_seat(CreateBusSeatBooking {
            user_id: customer.id,
            seat_id: seat.id,
            notes: None,
        })
        .await
        .unwrap();
    service.cancel(booking.id, customer.id).await.unwrap();

    let released = BusRepository::new(db).get_seat(seat.id).await?.unwrap();
    assert!(!released.is_booked);
    assert!(released.booked_by.is_none());

    Ok(())
}

/// Only the original requester may cancel.
#[tokio::test]
async fn cancel_by_another_user_is_forbidden() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, vehicle) = carsharing_fixture(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let locks = ResourceLocks::new();
    let service = booking_service(db, &locks);

    let booking = service
        .create_carsharing(carsharing_params(customer.id, vehicle.id, 1, Some(3)))
        .await
        .unwrap();

    let result = service.cancel(booking.id, stranger.id).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    // Still pending for the rightful owner.
    let unchanged = service.get(booking.id).await.unwrap();
    assert_eq!(unchanged.status, BookingStatus::Pending);

    Ok(())
}

/// Terminal bookings reject cancellation with a transition error.
#[tokio::test]
async fn cancel_of_completed_booking_is_a_transition_error() -> Result<(), DbErr> {
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
    service.complete(booking.id).await.unwrap();

    let result = service.cancel(booking.id, customer.id).await;
    assert!(matches!(
        result,
        Err(AppError::InvalidTransition {
            from: BookingStatus::Completed,
            to: BookingStatus::Canceled,
        })
    ));

    Ok(())
}

#[tokio::test]
async fn cancel_of_canceled_booking_is_a_transition_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, vehicle) = carsharing_fixture(db).await?;
    let locks = ResourceLocks::new();
    let service = booking_service(db, &locks);

    let booking = service
        .create_carsharing(carsharing_params(customer.id, vehicle.id, 1, Some(3)))
        .await
        .unwrap();
    service.cancel(booking.id, customer.id).await.unwrap();

    let result = service.cancel(booking.id, customer.id).await;
    assert!(matches!(result, Err(AppError::InvalidTransition { .. })));

    Ok(())
}

#[tokio::test]
async fn cancel_of_unknown_booking_is_not_found() {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let locks = ResourceLocks::new();
    let service = booking_service(db, &locks);

    let result = service.cancel(4711, 1).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
