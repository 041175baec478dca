/// Which rating a review feeds: the target's driver rating or their
/// detailing rating. Bus seat bookings are not reviewable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewKind {
    Carsharing,
    Detailing,
}

impl ReviewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Carsharing => "carsharing",
            Self::Detailing => "detailing",
        }
    }
}

/// Review submission parameters. The target user, review kind, and
/// vehicle reference are derived from the booking, never supplied by the
/// caller.
#[derive(Clone, Debug)]
pub struct SubmitReview {
    pub booking_id: i32,
    pub reviewer_id: i32,
    /// 1 to 5 inclusive.
    pub rating: i32,
    pub comment: Option<String>,
}

/// Fully resolved review row for insertion, assembled by the review
/// service from a `SubmitReview` and the completed booking.
#[derive(Clone, Debug)]
pub struct NewReview {
    pub booking_id: i32,
    pub reviewer_id: i32,
    pub target_id: i32,
    pub vehicle_id: Option<i32>,
    pub rating: i32,
    pub comment: Option<String>,
    pub kind: ReviewKind,
}
