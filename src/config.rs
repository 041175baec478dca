use crate::error::{config::ConfigError, AppError};

const DEFAULT_CARSHARING_RADIUS_KM: f64 = 10.0;
const DEFAULT_DETAILING_RADIUS_KM: f64 = 15.0;
const DEFAULT_BOOKING_DURATION_HOURS: i64 = 1;

/// Search-level defaults for geo-filtered availability queries.
///
/// The detailing radius is advisory only: each provider's own
/// `service_radius_km` is the authoritative bound for detailing matches.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    pub carsharing_radius_km: f64,
    pub detailing_radius_km: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            carsharing_radius_km: DEFAULT_CARSHARING_RADIUS_KM,
            detailing_radius_km: DEFAULT_DETAILING_RADIUS_KM,
        }
    }
}

/// Lifecycle policy knobs.
#[derive(Clone, Copy, Debug)]
pub struct BookingPolicy {
    /// Duration assumed for open-ended carsharing requests.
    pub default_duration_hours: i64,
    /// Whether cancellation restores the vehicle `is_available` / bus seat
    /// `is_booked` flag. Off by default: a canceled booking keeps its hold
    /// on the resource until an operator intervenes.
    pub release_resources_on_cancel: bool,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            default_duration_hours: DEFAULT_BOOKING_DURATION_HOURS,
            release_resources_on_cancel: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub search: SearchConfig,
    pub policy: BookingPolicy,
}

impl Config {
    /// Loads configuration from the environment, honoring a local `.env`
    /// file when one exists. `DATABASE_URL` is required; everything else
    /// falls back to its default.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            search: SearchConfig {
                carsharing_radius_km: parse_env(
                    "CARSHARING_SEARCH_RADIUS_KM",
                    DEFAULT_CARSHARING_RADIUS_KM,
                )?,
                detailing_radius_km: parse_env(
                    "DETAILING_SEARCH_RADIUS_KM",
                    DEFAULT_DETAILING_RADIUS_KM,
                )?,
            },
            policy: BookingPolicy {
                default_duration_hours: parse_env(
                    "DEFAULT_BOOKING_DURATION_HOURS",
                    DEFAULT_BOOKING_DURATION_HOURS,
                )?,
                release_resources_on_cancel: parse_env("RELEASE_RESOURCES_ON_CANCEL", false)?,
            },
        })
    }
}

/// Parses an optional environment variable, falling back to a default when
/// unset and failing when set to an unparseable value.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
