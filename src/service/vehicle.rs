use sea_orm::DatabaseConnection;

use crate::{data::vehicle::VehicleRepository, error::AppError, model::vehicle::RegisterVehicle};

/// Vehicle inventory operations for owners.
pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a vehicle for its owner. The vehicle stays out of search
    /// until an admin approves it.
    ///
    /// # Returns
    /// - `Ok(Model)`: The registered vehicle
    /// - `Err(AppError::Validation)`: Negative rate in the schedule
    pub async fn register(
        &self,
        params: RegisterVehicle,
    ) -> Result<entity::vehicle::Model, AppError> {
        for rate in [params.hourly_rate, params.daily_rate].into_iter().flatten() {
            if rate.is_sign_negative() {
                return Err(AppError::Validation(
                    "vehicle rates must not be negative".to_string(),
                ));
            }
        }

        Ok(VehicleRepository::new(self.db).create(params).await?)
    }

    /// Lists the bookable pool: approved vehicles still flagged
    /// available.
    pub async fn list_available(&self) -> Result<Vec<entity::vehicle::Model>, AppError> {
        Ok(VehicleRepository::new(self.db).get_approved_available().await?)
    }

    /// Lists everything an owner has registered, whatever the state.
    pub async fn for_owner(&self, owner_id: i32) -> Result<Vec<entity::vehicle::Model>, AppError> {
        Ok(VehicleRepository::new(self.db).get_by_owner(owner_id).await?)
    }

    /// Gets one vehicle.
    pub async fn get(&self, vehicle_id: i32) -> Result<entity::vehicle::Model, AppError> {
        VehicleRepository::new(self.db)
            .get_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", vehicle_id)))
    }
}
