//! Marketplace booking core for mobihub.
//!
//! Coordinates three booking domains against a shared inventory of
//! vehicles, detailing providers, and bus seats:
//!
//! - **Availability** (`service::availability`) - geospatial filtering plus
//!   temporal conflict detection over existing bookings
//! - **Pricing** (`pricing`) - deterministic price computation from a
//!   resource's rate schedule and the requested interval
//! - **Booking lifecycle** (`service::booking`) - creation, confirmation,
//!   cancellation, and completion with per-resource serialization so
//!   conflict checks and inserts are atomic
//! - **Reviews** (`service::review`) - post-completion reviews with full
//!   rating-rollup recomputation
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Service Layer** (`service/`) - Business logic orchestration
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application error taxonomy
//!
//! Supporting modules provide infrastructure: `config` (environment-based
//! configuration), `state` (shared application state), `startup`
//! (connection + migration bootstrap), and the pure leaves `geo` and
//! `pricing`.
//!
//! HTTP transport, credential handling, and payment/notification delivery
//! mechanics are intentionally absent: callers supply an authenticated
//! user id and gateway implementations, and the core trusts both.

pub mod config;
pub mod data;
pub mod error;
pub mod geo;
pub mod model;
pub mod pricing;
pub mod service;
pub mod startup;
pub mod state;
