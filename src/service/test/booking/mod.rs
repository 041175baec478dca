use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{booking::BookingRepository, vehicle::VehicleRepository},
    error::AppError,
    model::{
        booking::{
            BookingDetails, BookingStatus, CreateBusSeatBooking, CreateCarsharingBooking,
            CreateDetailingBooking,
        },
        location::Location,
    },
    service::locks::ResourceLocks,
};

use super::{booking_service, booking_service_with_policy};

mod cancel;
mod concurrency;
mod lifecycle;

fn hours_from_now(hours: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(hours)
}

fn pickup() -> Location {
    Location::new("1 Vitosha Blvd", 42.6977, 23.3219)
}

fn carsharing_params(
    user_id: i32,
    vehicle_id: i32,
    start_hours: i64,
    end_hours: Option<i64>,
) -> CreateCarsharingBooking {
    CreateCarsharingBooking {
        user_id,
        vehicle_id,
        start_time: hours_from_now(start_hours),
        end_time: end_hours.map(hours_from_now),
        pickup: pickup(),
        dropoff: None,
    }
}

/// Standard fixture: a customer, an owner, and the owner's searchable
/// vehicle (hourly 10.00 / daily 50.00).
async fn carsharing_fixture(
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
