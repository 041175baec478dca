use super::*;

use std::sync::Arc;

use crate::{
    config::BookingPolicy,
    service::{
        booking::BookingService,
        notification::{NoopNotificationGateway, NotificationService},
    },
};

/// Two concurrent requests for the same vehicle and overlapping window:
/// exactly one commits, the other sees `ResourceUnavailable`. The
/// per-resource lock makes the conflict re-check and the insert atomic,
/// so the check-then-act window between search and commit cannot
/// double-book.
#[tokio::test]
async fn concurrent_overlapping_requests_produce_one_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notification_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let (customer, _owner, vehicle) = carsharing_fixture(&db).await?;
    let rival = factory::user::create_user(&db).await?;
    let locks = Arc::new(ResourceLocks::new());

    let start = hours_from_now(1);
    let end = hours_from_now(3);

    let spawn_attempt = |user_id: i32| {
        let db = db.clone();
        let locks = locks.clone();
        let vehicle_id = vehicle.id;
        tokio::spawn(async move {
            let notifier =
                NotificationService::new(db.clone(), Arc::new(NoopNotificationGateway));
            let service =
                BookingService::new(&db, &locks, BookingPolicy::default(), notifier);
            service
                .create_carsharing(CreateCarsharingBooking {
                    user_id,
                    vehicle_id,
                    start_time: start,
                    end_time: Some(end),
                    pickup: pickup(),
                    dropoff: None,
                })
                .await
        })
    };

    let first = spawn_attempt(customer.id);
    let second = spawn_attempt(rival.id);

    let outcomes = [first.await.unwrap(), second.await.unwrap()];

    let successes = outcomes.iter().filter(|o| o.is_ok()).count();
    assert_eq!(successes, 1, "exactly one request may win the vehicle");

    let loser = outcomes.iter().find(|o| o.is_err()).unwrap();
    assert!(matches!(
        loser,
        Err(AppError::ResourceUnavailable(_))
    ));

    assert_eq!(BookingRepository::new(&db).count().await?, 1);

    Ok(())
}
