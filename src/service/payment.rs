use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        booking::BookingRepository,
        payment::{NewPayment, PaymentRepository},
    },
    error::AppError,
    model::{
        booking::BookingStatus,
        payment::{ChargeOutcome, PaymentStatus},
    },
};

const DEFAULT_CURRENCY: &str = "USD";

/// Charge seam to the payment processor.
///
/// `charge` resolves to an outcome when the processor answered (approved
/// or declined) and errors only on transport/processor failure. The core
/// consumes this at payment-confirmation time and nowhere else.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(
        &self,
        booking_id: i32,
        amount: Decimal,
        method: &str,
    ) -> Result<ChargeOutcome, AppError>;
}

/// Payment confirmation for pending bookings.
///
/// A successful charge records the payment and confirms the booking in
/// one transaction. A decline or gateway failure records a failed
/// attempt and leaves the booking `pending` - never `canceled`; backing
/// out of an unpaid booking takes an explicit cancel.
pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    gateway: Arc<dyn PaymentGateway>,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { db, gateway }
    }

    /// Charges the booking's stored total price and confirms the booking.
    ///
    /// The amount is always the price computed at creation time; it is
    /// never recomputed here.
    ///
    /// # Returns
    /// - `Ok(Model)`: The completed payment record
    /// - `Err(AppError::NotFound)`: Unknown booking
    /// - `Err(AppError::Forbidden)`: Booking belongs to someone else
    /// - `Err(AppError::Validation)`: Booking is not awaiting payment
    /// - `Err(AppError::Upstream)`: Gateway failure or decline; the
    ///   booking stays `pending`
    pub async fn confirm_payment(
        &self,
        booking_id: i32,
        requester_id: i32,
        method: &str,
    ) -> Result<entity::payment::Model, AppError> {
        let header = BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

        if header.user_id != requester_id {
            return Err(AppError::Forbidden(
                "Only the requester may pay for a booking".to_string(),
            ));
        }

        let status = BookingStatus::parse(&header.status)?;
        if status != BookingStatus::Pending {
            return Err(AppError::Validation(
                "Booking is not awaiting payment".to_string(),
            ));
        }

        let outcome = match self
            .gateway
            .charge(header.id, header.total_price, method)
            .await
        {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!("payment gateway error for booking {}: {err}", header.id);
                self.record_failure(&header, method).await?;
                return Err(AppError::Upstream(format!(
                    "Payment gateway failed: {err}"
                )));
            }
        };

        if !outcome.approved {
            self.record_failure(&header, method).await?;
            return Err(AppError::Upstream("Payment was declined".to_string()));
        }

        // Payment record and booking confirmation land atomically.
        let txn = self.db.begin().await?;

        let payment = PaymentRepository::new(&txn)
            .create(NewPayment {
                booking_id: header.id,
                user_id: header.user_id,
                amount: header.total_price,
                currency: DEFAULT_CURRENCY.to_string(),
                method: method.to_string(),
                gateway_reference: outcome.reference,
                status: PaymentStatus::Completed,
            })
            .await?;

        BookingRepository::new(&txn)
            .update_status(header.id, BookingStatus::Confirmed)
            .await?;

        txn.commit().await?;

        Ok(payment)
    }

    /// Records a failed charge attempt. The booking is left untouched.
    async fn record_failure(
        &self,
        header: &entity::booking::Model,
        method: &str,
    ) -> Result<(), AppError> {
        PaymentRepository::new(self.db)
            .create(NewPayment {
                booking_id: header.id,
                user_id: header.user_id,
                amount: header.total_price,
                currency: DEFAULT_CURRENCY.to_string(),
                method: method.to_string(),
                gateway_reference: None,
                status: PaymentStatus::Failed,
            })
            .await?;
        Ok(())
    }
}
