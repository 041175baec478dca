//! Startup wiring: database connection, migrations, state assembly.

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

use crate::{
    config::Config,
    error::AppError,
    service::{notification::NotificationGateway, payment::PaymentGateway},
    state::AppState,
};

/// Connects to the configured database, applies pending migrations, and
/// assembles the shared application state.
///
/// # Arguments
/// - `config`: Loaded configuration (see [`Config::from_env`])
/// - `notification_gateway`: Push/email delivery implementation
/// - `payment_gateway`: Payment processor implementation
pub async fn init(
    config: Config,
    notification_gateway: Arc<dyn NotificationGateway>,
    payment_gateway: Arc<dyn PaymentGateway>,
) -> Result<AppState, AppError> {
    let db = Database::connect(config.database_url.as_str()).await?;
    tracing::info!("database connection established");

    Migrator::up(&db, None).await?;
    tracing::info!("database migrations applied");

    Ok(AppState::new(
        db,
        config,
        notification_gateway,
        payment_gateway,
    ))
}
