//! Business logic layer.
//!
//! Services orchestrate repositories and the pure leaves (`geo`,
//! `pricing`) into the operations callers actually invoke: availability
//! search, quoting, the booking lifecycle, reviews with rating rollup,
//! notifications, payments, and inventory administration.
//!
//! Booking mutations run inside a database transaction *and* under a
//! per-resource async lock (`locks::ResourceLocks`), which closes the
//! check-then-act window between the availability re-check and the
//! insert: two concurrent overlapping requests for one resource resolve
//! to exactly one success.

pub mod admin;
pub mod availability;
pub mod booking;
pub mod bus;
pub mod locks;
pub mod notification;
pub mod payment;
pub mod review;
pub mod vehicle;

#[cfg(test)]
mod test;
