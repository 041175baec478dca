use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::BookingPolicy,
    service::{
        booking::BookingService,
        locks::ResourceLocks,
        notification::{NoopNotificationGateway, NotificationService},
    },
};

mod availability;
mod booking;
mod payment;
mod review;

/// Notification service wired to the no-op gateway.
fn notifier(db: &DatabaseConnection) -> NotificationService {
    NotificationService::new(db.clone(), Arc::new(NoopNotificationGateway))
}

/// Booking service with default policy over the given lock registry.
fn booking_service<'a>(
    db: &'a DatabaseConnection,
    locks: &'a ResourceLocks,
) -> BookingService<'a> {
    BookingService::new(db, locks, BookingPolicy::default(), notifier(db))
}

/// Booking service with a custom policy.
fn booking_service_with_policy<'a>(
    db: &'a DatabaseConnection,
    locks: &'a ResourceLocks,
    policy: BookingPolicy,
) -> BookingService<'a> {
    BookingService::new(db, locks, policy, notifier(db))
}
