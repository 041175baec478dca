use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::translation::LocalizedText;

/// One detailing provider matched by an availability search: the provider
/// row, the searched service, the flat estimated price, and the distance
/// between the search center and the provider's base.
#[derive(Clone, Debug)]
pub struct ProviderMatch {
    pub provider: entity::user::Model,
    pub service: entity::detailing_service::Model,
    pub estimated_price: Decimal,
    pub distance_km: f64,
}

/// Presentation view of a detailing service with translatable fields
/// resolved for one language.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetailingServiceDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    pub duration_minutes: i32,
    pub is_active: bool,
}

impl DetailingServiceDto {
    pub fn from_model(model: &entity::detailing_service::Model, lang: &str) -> Self {
        Self {
            id: model.id,
            name: LocalizedText::parse(&model.name).resolve(lang).to_string(),
            description: LocalizedText::parse(&model.description)
                .resolve(lang)
                .to_string(),
            base_price: model.base_price,
            duration_minutes: model.duration_minutes,
            is_active: model.is_active,
        }
    }
}
