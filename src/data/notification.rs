use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::notification::NotificationKind;

pub struct NotificationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes an in-app notification row.
    pub async fn create(
        &self,
        user_id: i32,
        title: &str,
        message: &str,
        kind: NotificationKind,
        related_id: Option<i32>,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title.to_string()),
            message: ActiveValue::Set(message.to_string()),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            related_id: ActiveValue::Set(related_id),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a user's notifications, newest first.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Marks the given notifications read, or every unread one when no
    /// ids are supplied. Ids not owned by the user are ignored.
    pub async fn mark_read(&self, user_id: i32, ids: Option<&[i32]>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id));

        query = match ids {
            Some(ids) => query.filter(entity::notification::Column::Id.is_in(ids.to_vec())),
            None => query.filter(entity::notification::Column::IsRead.eq(false)),
        };

        let result = query.exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
