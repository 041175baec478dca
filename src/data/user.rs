use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::review::ReviewKind;

pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a user by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets every detailing provider, in insertion order.
    pub async fn get_detailing_providers(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::IsDetailingProvider.eq(true))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Writes a recomputed rolling rating onto its target column.
    ///
    /// # Arguments
    /// - `id`: The rated user
    /// - `kind`: Selects `driver_rating` or `detailing_rating`
    /// - `rating`: The freshly recomputed mean
    pub async fn set_rating(
        &self,
        id: i32,
        kind: ReviewKind,
        rating: f64,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        match kind {
            ReviewKind::Carsharing => {
                active_model.driver_rating = ActiveValue::Set(rating);
            }
            ReviewKind::Detailing => {
                active_model.detailing_rating = ActiveValue::Set(rating);
            }
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Counts all users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }
}
