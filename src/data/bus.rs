use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::bus::{AddRoute, RegisterAgency};

pub struct BusRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers an agency, unapproved.
    pub async fn create_agency(
        &self,
        params: RegisterAgency,
    ) -> Result<entity::bus_agency::Model, DbErr> {
        let now = Utc::now();

        entity::bus_agency::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            approved: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an agency by ID.
    pub async fn get_agency(&self, id: i32) -> Result<Option<entity::bus_agency::Model>, DbErr> {
        entity::prelude::BusAgency::find_by_id(id).one(self.db).await
    }

    /// Gets approved agencies, in insertion order.
    pub async fn list_approved_agencies(&self) -> Result<Vec<entity::bus_agency::Model>, DbErr> {
        entity::prelude::BusAgency::find()
            .filter(entity::bus_agency::Column::Approved.eq(true))
            .order_by_asc(entity::bus_agency::Column::Id)
            .all(self.db)
            .await
    }

    /// Marks an agency approved.
    pub async fn approve_agency(&self, id: i32) -> Result<entity::bus_agency::Model, DbErr> {
        let agency = entity::prelude::BusAgency::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Agency {} not found", id)))?;

        let mut active_model: entity::bus_agency::ActiveModel = agency.into();
        active_model.approved = ActiveValue::Set(true);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Creates a route.
    pub async fn create_route(&self, params: AddRoute) -> Result<entity::bus_route::Model, DbErr> {
        let now = Utc::now();

        entity::bus_route::ActiveModel {
            agency_id: ActiveValue::Set(params.agency_id),
            origin: ActiveValue::Set(params.origin),
            destination: ActiveValue::Set(params.destination),
            departure_time: ActiveValue::Set(params.departure_time),
            available_seats: ActiveValue::Set(params.available_seats),
            price: ActiveValue::Set(params.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a route by ID.
    pub async fn get_route(&self, id: i32) -> Result<Option<entity::bus_route::Model>, DbErr> {
        entity::prelude::BusRoute::find_by_id(id).one(self.db).await
    }

    /// Gets all routes, in insertion order.
    pub async fn list_routes(&self) -> Result<Vec<entity::bus_route::Model>, DbErr> {
        entity::prelude::BusRoute::find()
            .order_by_asc(entity::bus_route::Column::Id)
            .all(self.db)
            .await
    }

    /// Fans out numbered seats for a freshly created route.
    pub async fn create_seats(
        &self,
        route_id: i32,
        count: i32,
    ) -> Result<Vec<entity::bus_seat::Model>, DbErr> {
        let mut seats = Vec::with_capacity(count.max(0) as usize);
        for number in 1..=count {
            let seat = entity::bus_seat::ActiveModel {
                route_id: ActiveValue::Set(route_id),
                seat_number: ActiveValue::Set(number.to_string()),
                is_booked: ActiveValue::Set(false),
                booked_by: ActiveValue::Set(None),
                booked_at: ActiveValue::Set(None),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            seats.push(seat);
        }
        Ok(seats)
    }

    /// Gets a route's seats, in seat order.
    pub async fn seats_for_route(
        &self,
        route_id: i32,
    ) -> Result<Vec<entity::bus_seat::Model>, DbErr> {
        entity::prelude::BusSeat::find()
            .filter(entity::bus_seat::Column::RouteId.eq(route_id))
            .order_by_asc(entity::bus_seat::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a seat by ID.
    pub async fn get_seat(&self, id: i32) -> Result<Option<entity::bus_seat::Model>, DbErr> {
        entity::prelude::BusSeat::find_by_id(id).one(self.db).await
    }

    /// Flips a seat to booked, stamping who took it and when.
    ///
    /// Runs inside the booking transaction so the flag and the booking
    /// row commit together.
    pub async fn mark_seat_booked(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<entity::bus_seat::Model, DbErr> {
        let seat = entity::prelude::BusSeat::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Seat {} not found", id)))?;

        let mut active_model: entity::bus_seat::ActiveModel = seat.into();
        active_model.is_booked = ActiveValue::Set(true);
        active_model.booked_by = ActiveValue::Set(Some(user_id));
        active_model.booked_at = ActiveValue::Set(Some(Utc::now()));

        active_model.update(self.db).await
    }

    /// Returns a seat to the pool, clearing the booking stamp.
    pub async fn release_seat(&self, id: i32) -> Result<entity::bus_seat::Model, DbErr> {
        let seat = entity::prelude::BusSeat::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Seat {} not found", id)))?;

        let mut active_model: entity::bus_seat::ActiveModel = seat.into();
        active_model.is_booked = ActiveValue::Set(false);
        active_model.booked_by = ActiveValue::Set(None);
        active_model.booked_at = ActiveValue::Set(None);

        active_model.update(self.db).await
    }
}
