use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::vehicle::RegisterVehicle;

pub struct VehicleRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a vehicle. New vehicles are available but unapproved
    /// until an admin signs them off.
    pub async fn create(&self, params: RegisterVehicle) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();

        entity::vehicle::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            make: ActiveValue::Set(params.make),
            model: ActiveValue::Set(params.model),
            year: ActiveValue::Set(params.year),
            license_plate: ActiveValue::Set(params.license_plate),
            color: ActiveValue::Set(params.color),
            vehicle_type: ActiveValue::Set(params.vehicle_type),
            seating_capacity: ActiveValue::Set(params.seating_capacity),
            fuel_type: ActiveValue::Set(params.fuel_type),
            transmission: ActiveValue::Set(params.transmission),
            daily_rate: ActiveValue::Set(params.daily_rate),
            hourly_rate: ActiveValue::Set(params.hourly_rate),
            is_available: ActiveValue::Set(true),
            is_approved: ActiveValue::Set(false),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a vehicle by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }

    /// Gets the searchable pool: approved vehicles still flagged
    /// available, in insertion order.
    pub async fn get_approved_available(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::IsApproved.eq(true))
            .filter(entity::vehicle::Column::IsAvailable.eq(true))
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all vehicles registered by an owner.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets vehicles awaiting admin approval.
    pub async fn get_pending_approval(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::IsApproved.eq(false))
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Flips the single-occupancy availability flag.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated vehicle
    /// - `Err(DbErr::RecordNotFound)`: No vehicle with this id
    pub async fn set_available(
        &self,
        id: i32,
        available: bool,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let vehicle = entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Vehicle {} not found", id)))?;

        let mut active_model: entity::vehicle::ActiveModel = vehicle.into();
        active_model.is_available = ActiveValue::Set(available);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Marks a vehicle approved for search.
    pub async fn approve(&self, id: i32) -> Result<entity::vehicle::Model, DbErr> {
        let vehicle = entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Vehicle {} not found", id)))?;

        let mut active_model: entity::vehicle::ActiveModel = vehicle.into();
        active_model.is_approved = ActiveValue::Set(true);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Counts all vehicles.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Vehicle::find().count(self.db).await
    }

    /// Counts vehicles awaiting approval.
    pub async fn count_pending_approval(&self) -> Result<u64, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::IsApproved.eq(false))
            .count(self.db)
            .await
    }
}
