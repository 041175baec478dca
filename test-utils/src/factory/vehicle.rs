//! Vehicle factory with customizable rates, location, and flags.
//!
//! Defaults produce a vehicle that shows up in availability search:
//! approved, available, located, with both rates set.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test vehicles.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::vehicle::VehicleFactory;
///
/// let vehicle = VehicleFactory::new(&db, owner.id)
///     .hourly_rate(Some("10".parse().unwrap()))
///     .location(Some((42.6977, 23.3219)))
///     .build()
///     .await?;
/// ```
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    hourly_rate: Option<Decimal>,
    daily_rate: Option<Decimal>,
    is_available: bool,
    is_approved: bool,
    location: Option<(f64, f64)>,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a factory with searchable defaults: approved, available,
    /// hourly rate 10.00, daily rate 50.00, based in central Sofia.
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            hourly_rate: Some(Decimal::new(1000, 2)),
            daily_rate: Some(Decimal::new(5000, 2)),
            is_available: true,
            is_approved: true,
            location: Some((42.6977, 23.3219)),
        }
    }

    pub fn hourly_rate(mut self, rate: Option<Decimal>) -> Self {
        self.hourly_rate = rate;
        self
    }

    pub fn daily_rate(mut self, rate: Option<Decimal>) -> Self {
        self.daily_rate = rate;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.is_available = available;
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.is_approved = approved;
        self
    }

    /// Sets the vehicle's coordinates; `None` leaves it unlocated, which
    /// excludes it from geo-filtered search.
    pub fn location(mut self, location: Option<(f64, f64)>) -> Self {
        self.location = location;
        self
    }

    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        let id = next_id();
        let now = Utc::now();

        entity::vehicle::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            make: ActiveValue::Set("Skoda".to_string()),
            model: ActiveValue::Set(format!("Octavia {id}")),
            year: ActiveValue::Set(2021),
            license_plate: ActiveValue::Set(format!("CB{:06}", id)),
            color: ActiveValue::Set(Some("blue".to_string())),
            vehicle_type: ActiveValue::Set("car".to_string()),
            seating_capacity: ActiveValue::Set(5),
            fuel_type: ActiveValue::Set(Some("petrol".to_string())),
            transmission: ActiveValue::Set(Some("manual".to_string())),
            daily_rate: ActiveValue::Set(self.daily_rate),
            hourly_rate: ActiveValue::Set(self.hourly_rate),
            is_available: ActiveValue::Set(self.is_available),
            is_approved: ActiveValue::Set(self.is_approved),
            latitude: ActiveValue::Set(self.location.map(|(lat, _)| lat)),
            longitude: ActiveValue::Set(self.location.map(|(_, lng)| lng)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
