use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{booking::BookingRepository, review::ReviewRepository, user::UserRepository},
    error::AppError,
    model::{
        booking::{BookingDetails, BookingKind, BookingStatus},
        review::{NewReview, ReviewKind, SubmitReview},
    },
};

/// Review submission and rating rollup.
///
/// A review is allowed only for the reviewer's own completed booking, at
/// most once per booking. Submitting one recomputes the target's rolling
/// rating from every review of that kind - a full-scan arithmetic mean,
/// not an incremental update, so the stored rating stays exact under any
/// later review edits or deletions. Both steps run in one transaction.
pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a review for a completed booking and refreshes the target
    /// user's rating.
    ///
    /// The review target is derived from the booking: the driver for a
    /// carsharing booking, the provider for a detailing booking. Bus
    /// seat bookings are not reviewable.
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored review
    /// - `Err(AppError::NotFound)`: Unknown booking
    /// - `Err(AppError::Forbidden)`: Booking belongs to someone else
    /// - `Err(AppError::Validation)`: Rating out of range, booking not
    ///   completed, unreviewable kind, or review already submitted
    pub async fn submit(&self, params: SubmitReview) -> Result<entity::review::Model, AppError> {
        if !(1..=5).contains(&params.rating) {
            return Err(AppError::Validation(
                "rating must be between 1 and 5".to_string(),
            ));
        }

        let bookings = BookingRepository::new(self.db);
        let header = bookings
            .get_by_id(params.booking_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Booking {} not found", params.booking_id))
            })?;

        if header.user_id != params.reviewer_id {
            return Err(AppError::Forbidden(
                "Only the requester may review their booking".to_string(),
            ));
        }

        let status = BookingStatus::parse(&header.status)?;
        if status != BookingStatus::Completed {
            return Err(AppError::Validation(
                "Only completed bookings can be reviewed".to_string(),
            ));
        }

        let kind = BookingKind::parse(&header.kind)?;
        let details = bookings
            .get_details(kind, header.id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("Booking {} has no {} payload", header.id, kind))
            })?;

        let (review_kind, target_id, vehicle_id) = match &details {
            BookingDetails::Carsharing(d) => {
                (ReviewKind::Carsharing, d.driver_id, Some(d.vehicle_id))
            }
            BookingDetails::Detailing(d) => {
                (ReviewKind::Detailing, d.provider_id, Some(d.vehicle_id))
            }
            BookingDetails::BusSeat(_) => {
                return Err(AppError::Validation(
                    "Bus seat bookings cannot be reviewed".to_string(),
                ))
            }
        };

        let reviews = ReviewRepository::new(self.db);
        if reviews.get_by_booking(header.id).await?.is_some() {
            return Err(AppError::Validation(
                "A review was already submitted for this booking".to_string(),
            ));
        }

        // Insert and rollup commit together so the stored rating never
        // drifts from the review set.
        let txn = self.db.begin().await?;

        let review = ReviewRepository::new(&txn)
            .create(NewReview {
                booking_id: header.id,
                reviewer_id: params.reviewer_id,
                target_id,
                vehicle_id,
                rating: params.rating,
                comment: params.comment,
                kind: review_kind,
            })
            .await?;

        let all_reviews = ReviewRepository::new(&txn)
            .list_for_target(target_id, review_kind)
            .await?;
        let average = average_rating(&all_reviews).ok_or_else(|| {
            AppError::Internal(format!("no reviews found for user {} after insert", target_id))
        })?;

        UserRepository::new(&txn)
            .set_rating(target_id, review_kind, average)
            .await?;

        txn.commit().await?;

        Ok(review)
    }
}

/// Exact arithmetic mean over a review set; `None` for an empty set.
fn average_rating(reviews: &[entity::review::Model]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: i64 = reviews.iter().map(|review| i64::from(review.rating)).sum();
    Some(sum as f64 / reviews.len() as f64)
}
