//! Domain models and operation parameter types.
//!
//! Entities (the persistence shape) live in the `entity` crate; the types
//! here are what the service layer speaks: the booking tagged union, the
//! validated interval, geographic points, and per-operation parameter
//! structs.

pub mod booking;
pub mod bus;
pub mod interval;
pub mod location;
pub mod notification;
pub mod payment;
pub mod provider;
pub mod review;
pub mod translation;
pub mod vehicle;
