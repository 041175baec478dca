//! Application error taxonomy.
//!
//! `AppError` is the top-level error type returned by every service and
//! repository boundary. Validation failures are raised before any state is
//! mutated; `ResourceUnavailable` covers conflicts detected at search or
//! commit time; upstream (payment, notification) failures are isolated so
//! they never roll back a booking that has already committed.

pub mod config;

use thiserror::Error;

use crate::{error::config::ConfigError, model::booking::BookingStatus};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Malformed or missing input, rejected before any state mutation.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    Validation(String),

    /// Resource or booking id could not be resolved.
    #[error("{0}")]
    NotFound(String),

    /// The acting user lacks rights over the target booking or resource.
    #[error("{0}")]
    Forbidden(String),

    /// A booking conflict was detected at search or commit time.
    ///
    /// Commit-time conflicts leave no partial state: the booking row and
    /// any resource flag update succeed or fail together.
    #[error("{0}")]
    ResourceUnavailable(String),

    /// A booking status transition outside the lifecycle state machine.
    #[error("invalid booking transition from {from} to {to}")]
    InvalidTransition {
        /// Status the booking currently holds
        from: BookingStatus,
        /// Status the caller attempted to move to
        to: BookingStatus,
    },

    /// Payment or notification dependency failure.
    ///
    /// Never fatal to an already-committed booking record.
    #[error("{0}")]
    Upstream(String),

    /// Internal invariant violation indicating a bug, such as a stored
    /// status string no variant recognizes.
    #[error("{0}")]
    Internal(String),
}
