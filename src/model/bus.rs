use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Bus agency registration. Agencies start unapproved and are hidden
/// from listings until an admin signs them off.
#[derive(Clone, Debug)]
pub struct RegisterAgency {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Route creation parameters. Seats are fanned out from
/// `available_seats` when the route is added, numbered from 1.
#[derive(Clone, Debug)]
pub struct AddRoute {
    pub agency_id: i32,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub available_seats: i32,
    pub price: Decimal,
}
