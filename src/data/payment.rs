use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::payment::PaymentStatus;

/// Fields for a new payment record.
#[derive(Clone, Debug)]
pub struct NewPayment {
    pub booking_id: i32,
    pub user_id: i32,
    pub amount: Decimal,
    pub currency: String,
    pub method: String,
    pub gateway_reference: Option<String>,
    pub status: PaymentStatus,
}

pub struct PaymentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a payment attempt. Failed attempts are recorded too - the
    /// payment trail is part of the booking audit history.
    pub async fn create(&self, new: NewPayment) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            booking_id: ActiveValue::Set(new.booking_id),
            user_id: ActiveValue::Set(new.user_id),
            amount: ActiveValue::Set(new.amount),
            currency: ActiveValue::Set(new.currency),
            method: ActiveValue::Set(new.method),
            gateway_reference: ActiveValue::Set(new.gateway_reference),
            status: ActiveValue::Set(new.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the payment attempts recorded against a booking, oldest
    /// first.
    pub async fn list_for_booking(
        &self,
        booking_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .order_by_asc(entity::payment::Column::Id)
            .all(self.db)
            .await
    }
}
