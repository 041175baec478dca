use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{booking::BookingRepository, user::UserRepository},
    error::AppError,
    model::{
        booking::{
            BookingDetails, BookingKind, BookingStatus, BusSeatDetails, CarsharingDetails,
            DetailingDetails, NewBooking,
        },
        location::Location,
        review::SubmitReview,
    },
    service::review::ReviewService,
};

mod submit;

fn hours_from_now(hours: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(hours)
}

fn submit(booking_id: i32, reviewer_id: i32, rating: i32) -> SubmitReview {
    SubmitReview {
        booking_id,
        reviewer_id,
        rating,
        comment: None,
    }
}

/// Inserts a carsharing booking in the given status, with distinct
/// non-overlapping windows per call.
async fn carsharing_booking_with_status(
    db: &DatabaseConnection,
    customer_id: i32,
    vehicle: &entity::vehicle::Model,
    status: BookingStatus,
    offset_hours: i64,
) -> Result<entity::booking::Model, DbErr> {
    BookingRepository::new(db)
        .create(
            &NewBooking {
                user_id: customer_id,
                kind: BookingKind::Carsharing,
                resource_id: vehicle.id,
                status,
                start_time: hours_from_now(offset_hours),
                end_time: Some(hours_from_now(offset_hours + 1)),
                total_price: Decimal::new(1000, 2),
            },
            &BookingDetails::Carsharing(CarsharingDetails {
                vehicle_id: vehicle.id,
                driver_id: vehicle.owner_id,
                pickup: Location::new("1 Vitosha Blvd", 42.6977, 23.3219),
                dropoff: None,
            }),
        )
        .await
}

/// Inserts a completed detailing booking.
async fn completed_detailing_booking(
    db: &DatabaseConnection,
    customer_id: i32,
    provider_id: i32,
    vehicle_id: i32,
    service: &entity::detailing_service::Model,
) -> Result<entity::booking::Model, DbErr> {
    BookingRepository::new(db)
        .create(
            &NewBooking {
                user_id: customer_id,
                kind: BookingKind::Detailing,
                resource_id: provider_id,
                status: BookingStatus::Completed,
                start_time: hours_from_now(-3),
                end_time: Some(hours_from_now(-2)),
                total_price: service.base_price,
            },
            &BookingDetails::Detailing(DetailingDetails {
                service_id: service.id,
                provider_id,
                vehicle_id,
                location: Location::new("1 Vitosha Blvd", 42.6977, 23.3219),
                notes: None,
            }),
        )
        .await
}

/// Inserts a completed bus seat booking.
async fn completed_bus_booking(
    db: &DatabaseConnection,
    customer_id: i32,
    route: &entity::bus_route::Model,
    seat: &entity::bus_seat::Model,
) -> Result<entity::booking::Model, DbErr> {
    BookingRepository::new(db)
        .create(
            &NewBooking {
                user_id: customer_id,
                kind: BookingKind::BusSeat,
                resource_id: seat.id,
                status: BookingStatus::Completed,
                start_time: route.departure_time,
                end_time: None,
                total_price: route.price,
            },
            &BookingDetails::BusSeat(BusSeatDetails {
                route_id: route.id,
                seat_id: seat.id,
                agency_id: route.agency_id,
                notes: None,
            }),
        )
        .await
}
