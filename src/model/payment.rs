/// Payment record status, stored as a short string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

/// Result of a gateway charge attempt that reached the processor.
///
/// Declines are outcomes, not transport errors: the gateway answered and
/// said no.
#[derive(Clone, Debug, PartialEq)]
pub struct ChargeOutcome {
    pub approved: bool,
    /// Processor-side reference for reconciliation, present on approval.
    pub reference: Option<String>,
}
