//! SeaORM entities for the mobihub marketplace schema.
//!
//! Booking records are split into a shared header table (`bookings`) and
//! one payload table per booking kind, mirroring the domain-level tagged
//! union. The header carries `(kind, resource_id)` so conflict queries
//! stay on a single table.

pub mod prelude;

pub mod booking;
pub mod bus_agency;
pub mod bus_route;
pub mod bus_seat;
pub mod bus_seat_booking;
pub mod carsharing_booking;
pub mod detailing_booking;
pub mod detailing_service;
pub mod notification;
pub mod payment;
pub mod review;
pub mod user;
pub mod vehicle;
