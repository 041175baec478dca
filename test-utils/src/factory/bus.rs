//! Bus fixtures: agencies, routes, seats.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates an agency, approved by default so it shows up in listings.
pub async fn create_agency(
    db: &DatabaseConnection,
    approved: bool,
) -> Result<entity::bus_agency::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();

    entity::bus_agency::ActiveModel {
        name: ActiveValue::Set(format!("Agency {id}")),
        email: ActiveValue::Set(format!("agency{id}@example.com")),
        phone: ActiveValue::Set(format!("+3592{:07}", id)),
        approved: ActiveValue::Set(approved),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a route departing tomorrow at price 18.50.
pub async fn create_route(
    db: &DatabaseConnection,
    agency_id: i32,
    available_seats: i32,
) -> Result<entity::bus_route::Model, DbErr> {
    let now = Utc::now();

    entity::bus_route::ActiveModel {
        agency_id: ActiveValue::Set(agency_id),
        origin: ActiveValue::Set("Sofia".to_string()),
        destination: ActiveValue::Set("Plovdiv".to_string()),
        departure_time: ActiveValue::Set(now + Duration::days(1)),
        available_seats: ActiveValue::Set(available_seats),
        price: ActiveValue::Set(Decimal::new(1850, 2)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a single unbooked seat on a route.
pub async fn create_seat(
    db: &DatabaseConnection,
    route_id: i32,
    seat_number: &str,
) -> Result<entity::bus_seat::Model, DbErr> {
    entity::bus_seat::ActiveModel {
        route_id: ActiveValue::Set(route_id),
        seat_number: ActiveValue::Set(seat_number.to_string()),
        is_booked: ActiveValue::Set(false),
        booked_by: ActiveValue::Set(None),
        booked_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an approved agency with a route and one seat, returning all
/// three.
pub async fn create_bookable_seat(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::bus_agency::Model,
        entity::bus_route::Model,
        entity::bus_seat::Model,
    ),
    DbErr,
> {
    let agency = create_agency(db, true).await?;
    let route = create_route(db, agency.id, 1).await?;
    let seat = create_seat(db, route.id, "1").await?;

    Ok((agency, route, seat))
}
