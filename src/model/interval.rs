use chrono::{DateTime, Duration, Utc};

use crate::error::AppError;

/// Validated booking time range.
///
/// Construction is the validation point: an interval whose end does not
/// lie strictly after its start never exists, so downstream layers
/// (availability filtering, pricing, persistence) can assume a positive
/// duration.
///
/// Overlap is half-open: two intervals conflict iff each starts before
/// the other ends. Touching endpoints do not conflict, so a booking may
/// begin the instant another ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookingInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl BookingInterval {
    /// Creates an interval, rejecting `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AppError> {
        if end <= start {
            return Err(AppError::Validation(
                "booking end time must be after its start time".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from a possibly open-ended request. A missing
    /// end defaults to `default_duration_hours` past the start.
    pub fn from_open_ended(
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
        default_duration_hours: i64,
    ) -> Result<Self, AppError> {
        match end {
            Some(end) => Self::new(start, end),
            None => Self::new(start, start + Duration::hours(default_duration_hours)),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Half-open overlap predicate: `startA < endB && startB > endA`.
    pub fn overlaps(&self, other: &BookingInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}
