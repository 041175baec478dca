use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::review::{NewReview, ReviewKind};

pub struct ReviewRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review. The unique index on `booking_id` backstops the
    /// one-review-per-booking rule if two submissions race.
    pub async fn create(&self, new: NewReview) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            booking_id: ActiveValue::Set(new.booking_id),
            reviewer_id: ActiveValue::Set(new.reviewer_id),
            target_id: ActiveValue::Set(new.target_id),
            vehicle_id: ActiveValue::Set(new.vehicle_id),
            rating: ActiveValue::Set(new.rating),
            comment: ActiveValue::Set(new.comment),
            kind: ActiveValue::Set(new.kind.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the review attached to a booking, if any.
    pub async fn get_by_booking(
        &self,
        booking_id: i32,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::BookingId.eq(booking_id))
            .one(self.db)
            .await
    }

    /// Gets every review of one kind targeting a user. The rating rollup
    /// reads this full set on every recompute.
    pub async fn list_for_target(
        &self,
        target_id: i32,
        kind: ReviewKind,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::TargetId.eq(target_id))
            .filter(entity::review::Column::Kind.eq(kind.as_str()))
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await
    }
}
