use rust_decimal::Decimal;

/// Vehicle registration parameters. New vehicles start available but
/// unapproved; an admin approval pass puts them into search results.
#[derive(Clone, Debug)]
pub struct RegisterVehicle {
    pub owner_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub vehicle_type: String,
    pub seating_capacity: i32,
    pub color: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub daily_rate: Option<Decimal>,
    pub hourly_rate: Option<Decimal>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
