use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    config::SearchConfig,
    data::booking::BookingRepository,
    model::{
        booking::{
            BookingDetails, BookingKind, BookingStatus, CarsharingDetails, DetailingDetails,
            NewBooking,
        },
        interval::BookingInterval,
        location::{GeoPoint, Location},
    },
    service::availability::AvailabilityService,
};

mod quotes;
mod vehicles;

/// Central Sofia; the vehicle factory default location.
const CENTER: GeoPoint = GeoPoint {
    latitude: 42.6977,
    longitude: 23.3219,
};

/// One degree of latitude is ~111.2 km; this shifts a point north by
/// roughly the given distance.
fn point_km_north(from: GeoPoint, km: f64) -> GeoPoint {
    GeoPoint::new(from.latitude + km / 111.195, from.longitude)
}

fn hours_from_now(hours: i64) -> DateTime<Utc> {
    Utc::now() + Duration::hours(hours)
}

fn interval(start_hours: i64, end_hours: i64) -> BookingInterval {
    BookingInterval::new(hours_from_now(start_hours), hours_from_now(end_hours)).unwrap()
}

fn availability(db: &DatabaseConnection) -> AvailabilityService<'_> {
    AvailabilityService::new(db, SearchConfig::default())
}

/// Inserts a carsharing booking row holding a vehicle over a window.
async fn hold_vehicle(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle: &entity::vehicle::Model,
    status: BookingStatus,
    window: &BookingInterval,
) -> Result<entity::booking::Model, DbErr> {
    BookingRepository::new(db)
        .create(
            &NewBooking {
                user_id,
                kind: BookingKind::Carsharing,
                resource_id: vehicle.id,
                status,
                start_time: window.start(),
                end_time: Some(window.end()),
                total_price: Decimal::new(2000, 2),
            },
            &BookingDetails::Carsharing(CarsharingDetails {
                vehicle_id: vehicle.id,
                driver_id: vehicle.owner_id,
                pickup: Location::new("1 Vitosha Blvd", CENTER.latitude, CENTER.longitude),
                dropoff: None,
            }),
        )
        .await
}

/// Inserts a detailing booking row holding a provider over a window.
async fn hold_provider(
    db: &DatabaseConnection,
    user_id: i32,
    provider_id: i32,
    vehicle_id: i32,
    service: &entity::detailing_service::Model,
    status: BookingStatus,
    window: &BookingInterval,
) -> Result<entity::booking::Model, DbErr> {
    BookingRepository::new(db)
        .create(
            &NewBooking {
                user_id,
                kind: BookingKind::Detailing,
                resource_id: provider_id,
                status,
                start_time: window.start(),
                end_time: Some(window.end()),
                total_price: service.base_price,
            },
            &BookingDetails::Detailing(DetailingDetails {
                service_id: service.id,
                provider_id,
                vehicle_id,
                location: Location::new("1 Vitosha Blvd", CENTER.latitude, CENTER.longitude),
                notes: None,
            }),
        )
        .await
}
