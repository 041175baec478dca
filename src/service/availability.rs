use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    config::SearchConfig,
    data::{
        booking::BookingRepository, bus::BusRepository,
        detailing_service::DetailingServiceRepository, user::UserRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
    geo,
    model::{
        booking::{BookingKind, BookingStatus},
        interval::BookingInterval,
        location::GeoPoint,
        provider::{DetailingServiceDto, ProviderMatch},
    },
    pricing,
};

/// Availability search over the shared resource inventory.
///
/// Every search applies the same funnel: keep resources that are live
/// (approved/active, and flagged available where the domain has a flag),
/// drop resources without a location, keep those inside the radius, then
/// reject any with a booking in the domain's active status set whose
/// interval overlaps the request. Results come back in insertion order;
/// no distance sorting.
pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
    search: SearchConfig,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection, search: SearchConfig) -> Self {
        Self { db, search }
    }

    /// Finds vehicles bookable for the interval near a point.
    ///
    /// # Arguments
    /// - `interval`: Requested rental window (already validated by
    ///   construction)
    /// - `center`: Search center
    /// - `radius_km`: Search radius; the configured carsharing default
    ///   when absent
    ///
    /// # Returns
    /// - `Ok(vehicles)`: Matching vehicles in insertion order; empty when
    ///   nothing matches
    /// - `Err(AppError)`: Database error
    pub async fn search_vehicles(
        &self,
        interval: &BookingInterval,
        center: GeoPoint,
        radius_km: Option<f64>,
    ) -> Result<Vec<entity::vehicle::Model>, AppError> {
        let radius_km = radius_km.unwrap_or(self.search.carsharing_radius_km);
        let vehicles = VehicleRepository::new(self.db).get_approved_available().await?;
        let bookings = BookingRepository::new(self.db);

        let mut available = Vec::new();
        for vehicle in vehicles {
            let Some(location) = GeoPoint::from_parts(vehicle.latitude, vehicle.longitude) else {
                continue;
            };
            if !geo::is_within_radius(center, location, radius_km) {
                continue;
            }

            let conflicts = bookings
                .find_conflicting(
                    BookingKind::Carsharing,
                    vehicle.id,
                    &BookingStatus::CARSHARING_ACTIVE,
                    interval,
                )
                .await?;
            if conflicts.is_empty() {
                available.push(vehicle);
            }
        }

        Ok(available)
    }

    /// Finds detailing providers free to perform a service starting at
    /// `start_time` near a point.
    ///
    /// The job window is `start_time` plus the service's configured
    /// duration. `radius_km` is advisory only and deliberately not
    /// applied: each provider's declared `service_radius_km` is the bound
    /// that decides a match, so a provider outside their own radius never
    /// appears however wide the search, and one inside it appears however
    /// narrow.
    ///
    /// # Returns
    /// - `Ok(matches)`: Provider matches in insertion order; empty when
    ///   the service is missing or inactive
    /// - `Err(AppError)`: Database or validation error
    pub async fn search_providers(
        &self,
        service_id: i32,
        start_time: DateTime<Utc>,
        center: GeoPoint,
        _radius_km: Option<f64>,
    ) -> Result<Vec<ProviderMatch>, AppError> {
        let Some(service) = DetailingServiceRepository::new(self.db)
            .get_by_id(service_id)
            .await?
        else {
            return Ok(Vec::new());
        };
        if !service.is_active {
            return Ok(Vec::new());
        }

        let interval = BookingInterval::new(
            start_time,
            start_time + Duration::minutes(i64::from(service.duration_minutes)),
        )?;

        let providers = UserRepository::new(self.db).get_detailing_providers().await?;
        let bookings = BookingRepository::new(self.db);

        let mut matches = Vec::new();
        for provider in providers {
            let Some(location) = GeoPoint::from_parts(provider.latitude, provider.longitude)
            else {
                continue;
            };

            let distance_km = geo::distance_km(center, location);
            if distance_km > f64::from(provider.service_radius_km) {
                continue;
            }

            let conflicts = bookings
                .find_conflicting(
                    BookingKind::Detailing,
                    provider.id,
                    &BookingStatus::DETAILING_ACTIVE,
                    &interval,
                )
                .await?;
            if conflicts.is_empty() {
                matches.push(ProviderMatch {
                    provider,
                    service: service.clone(),
                    estimated_price: service.base_price,
                    distance_km,
                });
            }
        }

        Ok(matches)
    }

    /// Quotes a carsharing rental without touching any state. Quoting is
    /// deterministic: identical inputs always produce identical prices.
    pub async fn quote_vehicle(
        &self,
        vehicle_id: i32,
        interval: &BookingInterval,
    ) -> Result<Decimal, AppError> {
        let vehicle = VehicleRepository::new(self.db)
            .get_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", vehicle_id)))?;

        pricing::carsharing_price(vehicle.hourly_rate, vehicle.daily_rate, interval)
    }

    /// Quotes a detailing service: the flat base price, independent of
    /// duration.
    pub async fn quote_service(&self, service_id: i32) -> Result<Decimal, AppError> {
        let service = DetailingServiceRepository::new(self.db)
            .get_by_id(service_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", service_id)))?;

        Ok(service.base_price)
    }

    /// Quotes a bus route seat: the flat route price.
    pub async fn quote_route(&self, route_id: i32) -> Result<Decimal, AppError> {
        let route = BusRepository::new(self.db)
            .get_route(route_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Route {} not found", route_id)))?;

        Ok(route.price)
    }

    /// Lists the active detailing catalog with names and descriptions
    /// resolved for one language.
    pub async fn list_services(&self, lang: &str) -> Result<Vec<DetailingServiceDto>, AppError> {
        let services = DetailingServiceRepository::new(self.db).list_active().await?;

        Ok(services
            .iter()
            .map(|service| DetailingServiceDto::from_model(service, lang))
            .collect())
    }
}
