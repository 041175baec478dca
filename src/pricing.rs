//! Deterministic price computation.
//!
//! All money math runs on `rust_decimal::Decimal`; binary floating point
//! never touches an amount. Prices are computed exactly once, at booking
//! creation, and stored - reads never recompute.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{error::AppError, model::interval::BookingInterval};

const SECONDS_PER_HOUR: i64 = 3600;
const HOURLY_THRESHOLD_SECONDS: i64 = 24 * SECONDS_PER_HOUR;

/// Carsharing price for a vehicle's rate schedule over an interval.
///
/// Rentals under 24 hours bill at the hourly rate times the fractional
/// hour count when an hourly rate exists. Everything else bills at the
/// daily rate times `whole_days + 1`: any remainder rounds up to a full
/// day, *including* durations that are an exact multiple of 24 hours,
/// which therefore bill one day more than their length. That overcount is
/// long-standing billing behavior and is preserved deliberately; see the
/// pricing tests before touching it.
pub fn carsharing_price(
    hourly_rate: Option<Decimal>,
    daily_rate: Option<Decimal>,
    interval: &BookingInterval,
) -> Result<Decimal, AppError> {
    let seconds = interval.duration().num_seconds();

    let price = match hourly_rate {
        Some(hourly) if seconds < HOURLY_THRESHOLD_SECONDS => {
            let hours = Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR);
            (hourly * hours).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        }
        _ => {
            let daily = daily_rate.ok_or_else(|| {
                AppError::Validation("vehicle has no daily rate configured".to_string())
            })?;
            let days = interval.duration().num_days() + 1;
            daily * Decimal::from(days)
        }
    };

    if price.is_sign_negative() {
        return Err(AppError::Validation(
            "rate schedule produced a negative price".to_string(),
        ));
    }

    Ok(price)
}
