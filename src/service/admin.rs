use sea_orm::DatabaseConnection;

use crate::{
    data::{
        booking::BookingRepository, bus::BusRepository, user::UserRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
};

/// Platform totals for the admin dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_vehicles: u64,
    pub total_bookings: u64,
    pub pending_approvals: u64,
}

/// Admin-gated inventory operations. Every method checks the acting
/// user's admin flag first and answers `Forbidden` otherwise.
pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Platform counts: users, vehicles, bookings, vehicles awaiting
    /// approval.
    pub async fn dashboard(&self, admin_id: i32) -> Result<DashboardStats, AppError> {
        self.require_admin(admin_id).await?;

        Ok(DashboardStats {
            total_users: UserRepository::new(self.db).count().await?,
            total_vehicles: VehicleRepository::new(self.db).count().await?,
            total_bookings: BookingRepository::new(self.db).count().await?,
            pending_approvals: VehicleRepository::new(self.db)
                .count_pending_approval()
                .await?,
        })
    }

    /// Lists vehicles awaiting approval.
    pub async fn pending_vehicles(
        &self,
        admin_id: i32,
    ) -> Result<Vec<entity::vehicle::Model>, AppError> {
        self.require_admin(admin_id).await?;

        Ok(VehicleRepository::new(self.db).get_pending_approval().await?)
    }

    /// Approves a vehicle into the searchable pool.
    pub async fn approve_vehicle(
        &self,
        admin_id: i32,
        vehicle_id: i32,
    ) -> Result<entity::vehicle::Model, AppError> {
        self.require_admin(admin_id).await?;

        let repo = VehicleRepository::new(self.db);
        repo.get_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", vehicle_id)))?;

        Ok(repo.approve(vehicle_id).await?)
    }

    /// Approves a bus agency into the public listing.
    pub async fn approve_agency(
        &self,
        admin_id: i32,
        agency_id: i32,
    ) -> Result<entity::bus_agency::Model, AppError> {
        self.require_admin(admin_id).await?;

        let repo = BusRepository::new(self.db);
        repo.get_agency(agency_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Agency {} not found", agency_id)))?;

        Ok(repo.approve_agency(agency_id).await?)
    }

    async fn require_admin(&self, user_id: i32) -> Result<entity::user::Model, AppError> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        if !user.is_admin {
            return Err(AppError::Forbidden(
                "Administrator rights required".to_string(),
            ));
        }

        Ok(user)
    }
}
