use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::booking::BookingRepository,
    model::{
        booking::{BookingDetails, BookingKind, BookingStatus, CarsharingDetails, NewBooking},
        interval::BookingInterval,
        location::Location,
    },
};

mod queries;

fn hours_from_now(hours: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(hours)
}

fn interval(start_hours: i64, end_hours: i64) -> BookingInterval {
    BookingInterval::new(hours_from_now(start_hours), hours_from_now(end_hours)).unwrap()
}

/// Inserts a carsharing booking over the given window directly through
/// the repository.
async fn carsharing_booking(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
    driver_id: i32,
    status: BookingStatus,
    window: &BookingInterval,
) -> Result<entity::booking::Model, DbErr> {
    let details = BookingDetails::Carsharing(CarsharingDetails {
        vehicle_id,
        driver_id,
        pickup: Location::new("1 Vitosha Blvd", 42.6977, 23.3219),
        dropoff: None,
    });

    BookingRepository::new(db)
        .create(
            &NewBooking {
                user_id,
                kind: BookingKind::Carsharing,
                resource_id: vehicle_id,
                status,
                start_time: window.start(),
                end_time: Some(window.end()),
                total_price: Decimal::new(2000, 2),
            },
            &details,
        )
        .await
}

/// Creates the standard fixture: a customer, an owner, and the owner's
/// vehicle.
async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::vehicle::Model,
    ),
    DbErr,
> {
    let customer = factory::user::create_user(db).await?;
    let owner = factory::user::create_driver(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, owner.id).build().await?;

    Ok((customer, owner, vehicle))
}
