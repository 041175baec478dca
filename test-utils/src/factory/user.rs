//! User factory for creating test accounts in each role.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a plain customer account with a unique email.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    base_user(db, false, false, false, None, None, 10).await
}

/// Creates an administrator account.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    base_user(db, true, false, false, None, None, 10).await
}

/// Creates a driver account (vehicle owner).
pub async fn create_driver(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    base_user(db, false, true, false, None, None, 10).await
}

/// Creates a detailing provider based at the given coordinates with the
/// given self-declared service radius.
pub async fn create_provider(
    db: &DatabaseConnection,
    latitude: f64,
    longitude: f64,
    service_radius_km: i32,
) -> Result<entity::user::Model, DbErr> {
    base_user(
        db,
        false,
        false,
        true,
        Some(latitude),
        Some(longitude),
        service_radius_km,
    )
    .await
}

async fn base_user(
    db: &DatabaseConnection,
    is_admin: bool,
    is_driver: bool,
    is_detailing_provider: bool,
    latitude: Option<f64>,
    longitude: Option<f64>,
    service_radius_km: i32,
) -> Result<entity::user::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();

    entity::user::ActiveModel {
        email: ActiveValue::Set(format!("user{id}@example.com")),
        first_name: ActiveValue::Set(format!("Test{id}")),
        last_name: ActiveValue::Set("User".to_string()),
        phone: ActiveValue::Set(format!("+3598{:08}", id)),
        is_admin: ActiveValue::Set(is_admin),
        is_driver: ActiveValue::Set(is_driver),
        is_detailing_provider: ActiveValue::Set(is_detailing_provider),
        driver_license: ActiveValue::Set(None),
        driver_verified: ActiveValue::Set(false),
        driver_rating: ActiveValue::Set(5.0),
        detailing_rating: ActiveValue::Set(5.0),
        service_radius_km: ActiveValue::Set(service_radius_km),
        detailing_bio: ActiveValue::Set(None),
        latitude: ActiveValue::Set(latitude),
        longitude: ActiveValue::Set(longitude),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
