use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::location::Location};

/// Booking lifecycle status.
///
/// `pending -> confirmed -> in_progress -> completed`, with cancellation
/// allowed from any non-terminal status. `completed` and `canceled` are
/// terminal. Detailing bookings enter at `confirmed` (no payment-gating
/// step before provider commitment); carsharing and bus seats enter at
/// `pending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Canceled,
}

impl BookingStatus {
    /// Statuses that hold a carsharing vehicle against overlapping requests.
    pub const CARSHARING_ACTIVE: [BookingStatus; 2] = [Self::Pending, Self::Confirmed];

    /// Statuses that hold a detailing provider against overlapping requests.
    pub const DETAILING_ACTIVE: [BookingStatus; 2] = [Self::Confirmed, Self::InProgress];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }

    /// Parses a stored status string, surfacing corrupt rows as internal
    /// errors rather than panicking.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "canceled" => Ok(Self::Canceled),
            other => Err(AppError::Internal(format!(
                "unknown booking status '{other}'"
            ))),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }

    /// The lifecycle transition table.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Confirmed, InProgress)
                | (Confirmed, Completed)
                | (InProgress, Completed)
                | (Pending, Canceled)
                | (Confirmed, Canceled)
                | (InProgress, Canceled)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which booking domain a record belongs to. Doubles as the discriminant
/// of the header row and the key domain for per-resource serialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingKind {
    Carsharing,
    Detailing,
    BusSeat,
}

impl BookingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Carsharing => "carsharing",
            Self::Detailing => "detailing",
            Self::BusSeat => "bus_seat",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "carsharing" => Ok(Self::Carsharing),
            "detailing" => Ok(Self::Detailing),
            "bus_seat" => Ok(Self::BusSeat),
            other => Err(AppError::Internal(format!("unknown booking kind '{other}'"))),
        }
    }
}

impl std::fmt::Display for BookingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Carsharing payload: the rented vehicle, its owner acting as driver,
/// and the pickup/dropoff locations.
#[derive(Clone, Debug, PartialEq)]
pub struct CarsharingDetails {
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub pickup: Location,
    pub dropoff: Option<Location>,
}

/// Detailing payload: the purchased service, the provider doing the job,
/// and the customer's vehicle and address.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailingDetails {
    pub service_id: i32,
    pub provider_id: i32,
    pub vehicle_id: i32,
    pub location: Location,
    pub notes: Option<String>,
}

/// Bus seat payload.
#[derive(Clone, Debug, PartialEq)]
pub struct BusSeatDetails {
    pub route_id: i32,
    pub seat_id: i32,
    pub agency_id: i32,
    pub notes: Option<String>,
}

/// Kind-specific booking payload; the variant always matches the header's
/// kind tag.
#[derive(Clone, Debug, PartialEq)]
pub enum BookingDetails {
    Carsharing(CarsharingDetails),
    Detailing(DetailingDetails),
    BusSeat(BusSeatDetails),
}

impl BookingDetails {
    pub fn kind(&self) -> BookingKind {
        match self {
            Self::Carsharing(_) => BookingKind::Carsharing,
            Self::Detailing(_) => BookingKind::Detailing,
            Self::BusSeat(_) => BookingKind::BusSeat,
        }
    }

    /// The resource whose calendar this booking occupies: the vehicle for
    /// carsharing, the provider for detailing, the seat for bus travel.
    pub fn resource_id(&self) -> i32 {
        match self {
            Self::Carsharing(d) => d.vehicle_id,
            Self::Detailing(d) => d.provider_id,
            Self::BusSeat(d) => d.seat_id,
        }
    }
}

/// A booking as the service layer sees it: the shared header joined with
/// its kind-specific payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub kind: BookingKind,
    pub status: BookingStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Computed once at creation; never recomputed on read.
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub details: BookingDetails,
}

impl Booking {
    /// Assembles the domain view from a header row and its payload.
    pub fn from_parts(
        header: entity::booking::Model,
        details: BookingDetails,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: header.id,
            user_id: header.user_id,
            kind: BookingKind::parse(&header.kind)?,
            status: BookingStatus::parse(&header.status)?,
            start_time: header.start_time,
            end_time: header.end_time,
            total_price: header.total_price,
            created_at: header.created_at,
            updated_at: header.updated_at,
            details,
        })
    }
}

/// Header fields for a new booking row, assembled by the lifecycle
/// service after availability and pricing checks pass.
#[derive(Clone, Debug)]
pub struct NewBooking {
    pub user_id: i32,
    pub kind: BookingKind,
    pub resource_id: i32,
    pub status: BookingStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_price: Decimal,
}

/// Carsharing booking request.
#[derive(Clone, Debug)]
pub struct CreateCarsharingBooking {
    pub user_id: i32,
    pub vehicle_id: i32,
    pub start_time: DateTime<Utc>,
    /// Open-ended when absent; the policy default duration applies.
    pub end_time: Option<DateTime<Utc>>,
    pub pickup: Location,
    pub dropoff: Option<Location>,
}

/// Detailing booking request. The end time is derived from the service's
/// configured duration, never supplied by the caller.
#[derive(Clone, Debug)]
pub struct CreateDetailingBooking {
    pub user_id: i32,
    pub service_id: i32,
    pub provider_id: i32,
    pub vehicle_id: i32,
    pub start_time: DateTime<Utc>,
    pub location: Location,
    pub notes: Option<String>,
}

/// Bus seat booking request. Start time comes from the route departure.
#[derive(Clone, Debug)]
pub struct CreateBusSeatBooking {
    pub user_id: i32,
    pub seat_id: i32,
    pub notes: Option<String>,
}
