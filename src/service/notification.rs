use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{NotificationDto, NotificationKind},
};

/// Delivery seam for push and email channels.
///
/// Implementations talk to FCM/APNs and the mail relay; the core only
/// hands them a recipient and the rendered text. Delivery is best-effort:
/// errors are logged by the caller and never reach the booking flow.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn send_push(&self, user_id: i32, title: &str, message: &str) -> Result<(), AppError>;

    async fn send_email(&self, user_id: i32, title: &str, message: &str) -> Result<(), AppError>;
}

/// Gateway that records deliveries in the log and does nothing else.
/// Default wiring for environments without push/email credentials.
pub struct NoopNotificationGateway;

#[async_trait]
impl NotificationGateway for NoopNotificationGateway {
    async fn send_push(&self, user_id: i32, title: &str, _message: &str) -> Result<(), AppError> {
        tracing::debug!("push notification skipped (no gateway): user={user_id} title={title}");
        Ok(())
    }

    async fn send_email(&self, user_id: i32, title: &str, _message: &str) -> Result<(), AppError> {
        tracing::debug!("email notification skipped (no gateway): user={user_id} title={title}");
        Ok(())
    }
}

/// In-app notifications plus fire-and-forget channel dispatch.
///
/// The in-app row is written synchronously so callers can rely on it;
/// push and email go out on a detached task and can neither delay nor
/// fail the operation that triggered them.
#[derive(Clone)]
pub struct NotificationService {
    db: DatabaseConnection,
    gateway: Arc<dyn NotificationGateway>,
}

impl NotificationService {
    pub fn new(db: DatabaseConnection, gateway: Arc<dyn NotificationGateway>) -> Self {
        Self { db, gateway }
    }

    /// Sends a notification: persists the in-app row, then dispatches
    /// push and email in the background.
    ///
    /// # Returns
    /// - `Ok(Model)`: The persisted in-app notification
    /// - `Err(AppError)`: Database error writing the row
    pub async fn send(
        &self,
        user_id: i32,
        title: &str,
        message: &str,
        kind: NotificationKind,
        related_id: Option<i32>,
    ) -> Result<entity::notification::Model, AppError> {
        let notification = NotificationRepository::new(&self.db)
            .create(user_id, title, message, kind, related_id)
            .await?;

        let gateway = self.gateway.clone();
        let title = title.to_string();
        let message = message.to_string();
        tokio::spawn(async move {
            if let Err(err) = gateway.send_push(user_id, &title, &message).await {
                tracing::warn!("push notification to user {user_id} failed: {err}");
            }
            if let Err(err) = gateway.send_email(user_id, &title, &message).await {
                tracing::warn!("email notification to user {user_id} failed: {err}");
            }
        });

        Ok(notification)
    }

    /// Gets a user's notifications, newest first, with translatable
    /// fields resolved for `lang`.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        lang: &str,
        limit: u64,
    ) -> Result<Vec<NotificationDto>, AppError> {
        let rows = NotificationRepository::new(&self.db)
            .list_for_user(user_id, limit)
            .await?;

        Ok(rows
            .iter()
            .map(|row| NotificationDto::from_model(row, lang))
            .collect())
    }

    /// Marks the given notifications read, or all unread ones when `ids`
    /// is `None`.
    pub async fn mark_read(&self, user_id: i32, ids: Option<&[i32]>) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(&self.db)
            .mark_read(user_id, ids)
            .await?)
    }
}
