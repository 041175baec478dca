use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{
    booking::{
        BookingDetails, BookingKind, BookingStatus, BusSeatDetails, CarsharingDetails,
        DetailingDetails, NewBooking,
    },
    interval::BookingInterval,
    location::Location,
};

pub struct BookingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking header together with its kind-specific payload
    /// row.
    ///
    /// Callers that also flip a resource flag must run this inside a
    /// transaction so the header, the payload, and the flag commit or
    /// roll back together.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created booking header
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        new: &NewBooking,
        details: &BookingDetails,
    ) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();

        let header = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(new.user_id),
            kind: ActiveValue::Set(new.kind.as_str().to_string()),
            resource_id: ActiveValue::Set(new.resource_id),
            status: ActiveValue::Set(new.status.as_str().to_string()),
            start_time: ActiveValue::Set(new.start_time),
            end_time: ActiveValue::Set(new.end_time),
            total_price: ActiveValue::Set(new.total_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        match details {
            BookingDetails::Carsharing(d) => {
                entity::carsharing_booking::ActiveModel {
                    booking_id: ActiveValue::Set(header.id),
                    vehicle_id: ActiveValue::Set(d.vehicle_id),
                    driver_id: ActiveValue::Set(d.driver_id),
                    pickup_address: ActiveValue::Set(d.pickup.address.clone()),
                    pickup_latitude: ActiveValue::Set(d.pickup.point.latitude),
                    pickup_longitude: ActiveValue::Set(d.pickup.point.longitude),
                    dropoff_address: ActiveValue::Set(
                        d.dropoff.as_ref().map(|loc| loc.address.clone()),
                    ),
                    dropoff_latitude: ActiveValue::Set(
                        d.dropoff.as_ref().map(|loc| loc.point.latitude),
                    ),
                    dropoff_longitude: ActiveValue::Set(
                        d.dropoff.as_ref().map(|loc| loc.point.longitude),
                    ),
                }
                .insert(self.db)
                .await?;
            }
            BookingDetails::Detailing(d) => {
                entity::detailing_booking::ActiveModel {
                    booking_id: ActiveValue::Set(header.id),
                    service_id: ActiveValue::Set(d.service_id),
                    provider_id: ActiveValue::Set(d.provider_id),
                    vehicle_id: ActiveValue::Set(d.vehicle_id),
                    address: ActiveValue::Set(d.location.address.clone()),
                    latitude: ActiveValue::Set(d.location.point.latitude),
                    longitude: ActiveValue::Set(d.location.point.longitude),
                    notes: ActiveValue::Set(d.notes.clone()),
                }
                .insert(self.db)
                .await?;
            }
            BookingDetails::BusSeat(d) => {
                entity::bus_seat_booking::ActiveModel {
                    booking_id: ActiveValue::Set(header.id),
                    route_id: ActiveValue::Set(d.route_id),
                    seat_id: ActiveValue::Set(d.seat_id),
                    agency_id: ActiveValue::Set(d.agency_id),
                    notes: ActiveValue::Set(d.notes.clone()),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(header)
    }

    /// Gets a booking header by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Loads the kind-specific payload for a booking header.
    ///
    /// # Returns
    /// - `Ok(Some(details))`: Payload row found and mapped
    /// - `Ok(None)`: No payload row exists for this booking
    /// - `Err(DbErr)`: Database error
    pub async fn get_details(
        &self,
        kind: BookingKind,
        booking_id: i32,
    ) -> Result<Option<BookingDetails>, DbErr> {
        match kind {
            BookingKind::Carsharing => {
                let row = entity::prelude::CarsharingBooking::find_by_id(booking_id)
                    .one(self.db)
                    .await?;
                Ok(row.map(|row| {
                    let dropoff = match (
                        row.dropoff_address,
                        row.dropoff_latitude,
                        row.dropoff_longitude,
                    ) {
                        (Some(address), Some(lat), Some(lng)) => {
                            Some(Location::new(address, lat, lng))
                        }
                        _ => None,
                    };
                    BookingDetails::Carsharing(CarsharingDetails {
                        vehicle_id: row.vehicle_id,
                        driver_id: row.driver_id,
                        pickup: Location::new(
                            row.pickup_address,
                            row.pickup_latitude,
                            row.pickup_longitude,
                        ),
                        dropoff,
                    })
                }))
            }
            BookingKind::Detailing => {
                let row = entity::prelude::DetailingBooking::find_by_id(booking_id)
                    .one(self.db)
                    .await?;
                Ok(row.map(|row| {
                    BookingDetails::Detailing(DetailingDetails {
                        service_id: row.service_id,
                        provider_id: row.provider_id,
                        vehicle_id: row.vehicle_id,
                        location: Location::new(row.address, row.latitude, row.longitude),
                        notes: row.notes,
                    })
                }))
            }
            BookingKind::BusSeat => {
                let row = entity::prelude::BusSeatBooking::find_by_id(booking_id)
                    .one(self.db)
                    .await?;
                Ok(row.map(|row| {
                    BookingDetails::BusSeat(BusSeatDetails {
                        route_id: row.route_id,
                        seat_id: row.seat_id,
                        agency_id: row.agency_id,
                        notes: row.notes,
                    })
                }))
            }
        }
    }

    /// Finds bookings on a resource whose interval overlaps the requested
    /// one and whose status is in the given active set.
    ///
    /// The overlap predicate is half-open (`start < requested.end AND
    /// end > requested.start`), so touching endpoints never conflict.
    /// Rows without an end time drop out of the comparison entirely.
    ///
    /// # Arguments
    /// - `kind`: Booking domain the resource belongs to
    /// - `resource_id`: Vehicle, provider, or seat id
    /// - `statuses`: Statuses that hold the resource
    /// - `interval`: Requested interval to test against
    pub async fn find_conflicting(
        &self,
        kind: BookingKind,
        resource_id: i32,
        statuses: &[BookingStatus],
        interval: &BookingInterval,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let status_strs: Vec<&str> = statuses.iter().map(BookingStatus::as_str).collect();

        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Kind.eq(kind.as_str()))
            .filter(entity::booking::Column::ResourceId.eq(resource_id))
            .filter(entity::booking::Column::Status.is_in(status_strs))
            .filter(entity::booking::Column::StartTime.lt(interval.end()))
            .filter(entity::booking::Column::EndTime.gt(interval.start()))
            .all(self.db)
            .await
    }

    /// Sets a booking's status and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated booking header
    /// - `Err(DbErr::RecordNotFound)`: No booking with this id
    pub async fn update_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<entity::booking::Model, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Gets a user's active bookings ordered by start time.
    pub async fn upcoming_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Status.is_in([
                BookingStatus::Pending.as_str(),
                BookingStatus::Confirmed.as_str(),
                BookingStatus::InProgress.as_str(),
            ]))
            .order_by_asc(entity::booking::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Gets a user's finished bookings, newest first.
    pub async fn history_for_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Status.is_in([
                BookingStatus::Completed.as_str(),
                BookingStatus::Canceled.as_str(),
            ]))
            .order_by_desc(entity::booking::Column::StartTime)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Counts all bookings.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Booking::find().count(self.db).await
    }
}
