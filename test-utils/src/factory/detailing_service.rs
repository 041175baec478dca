//! Detailing service factory.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating catalog entries. Defaults: active, 45.00 flat
/// price, 90 minutes.
pub struct DetailingServiceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    base_price: Decimal,
    duration_minutes: i32,
    is_active: bool,
}

impl<'a> DetailingServiceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Full detail {id}"),
            description: "Interior and exterior detail".to_string(),
            base_price: Decimal::new(4500, 2),
            duration_minutes: 90,
            is_active: true,
        }
    }

    /// Sets the stored name; pass a JSON language map to exercise
    /// translation resolution.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn base_price(mut self, base_price: Decimal) -> Self {
        self.base_price = base_price;
        self
    }

    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::detailing_service::Model, DbErr> {
        let now = Utc::now();

        entity::detailing_service::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            base_price: ActiveValue::Set(self.base_price),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
