use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::translation::LocalizedText;

/// Notification category, stored as a short string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Booking,
    Payment,
    Alert,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Payment => "payment",
            Self::Alert => "alert",
        }
    }
}

/// Presentation view of a notification with translatable fields resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NotificationDto {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub related_id: Option<i32>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl NotificationDto {
    pub fn from_model(model: &entity::notification::Model, lang: &str) -> Self {
        Self {
            id: model.id,
            title: LocalizedText::parse(&model.title).resolve(lang).to_string(),
            message: LocalizedText::parse(&model.message)
                .resolve(lang)
                .to_string(),
            kind: model.kind.clone(),
            related_id: model.related_id,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}
