use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::bus::BusRepository,
    error::AppError,
    model::bus::{AddRoute, RegisterAgency},
};

/// Bus inventory: agencies, routes, and seats.
pub struct BusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an agency. It stays hidden from listings until approved.
    pub async fn register_agency(
        &self,
        params: RegisterAgency,
    ) -> Result<entity::bus_agency::Model, AppError> {
        Ok(BusRepository::new(self.db).create_agency(params).await?)
    }

    /// Lists approved agencies.
    pub async fn list_agencies(&self) -> Result<Vec<entity::bus_agency::Model>, AppError> {
        Ok(BusRepository::new(self.db).list_approved_agencies().await?)
    }

    /// Adds a route and fans out its numbered seats in one transaction.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created route (seats included via
    ///   `seats_for_route`)
    /// - `Err(AppError::NotFound)`: Unknown agency
    /// - `Err(AppError::Validation)`: Non-positive seat count or price
    pub async fn add_route(&self, params: AddRoute) -> Result<entity::bus_route::Model, AppError> {
        if params.available_seats <= 0 {
            return Err(AppError::Validation(
                "a route needs at least one seat".to_string(),
            ));
        }
        if params.price.is_sign_negative() {
            return Err(AppError::Validation(
                "route price must not be negative".to_string(),
            ));
        }

        BusRepository::new(self.db)
            .get_agency(params.agency_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Agency {} not found", params.agency_id)))?;

        let txn = self.db.begin().await?;

        let bus = BusRepository::new(&txn);
        let seats = params.available_seats;
        let route = bus.create_route(params).await?;
        bus.create_seats(route.id, seats).await?;

        txn.commit().await?;

        Ok(route)
    }

    /// Lists all routes.
    pub async fn list_routes(&self) -> Result<Vec<entity::bus_route::Model>, AppError> {
        Ok(BusRepository::new(self.db).list_routes().await?)
    }

    /// Lists a route's seats with their booking flags.
    pub async fn seats_for_route(
        &self,
        route_id: i32,
    ) -> Result<Vec<entity::bus_seat::Model>, AppError> {
        BusRepository::new(self.db)
            .get_route(route_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Route {} not found", route_id)))?;

        Ok(BusRepository::new(self.db).seats_for_route(route_id).await?)
    }
}
