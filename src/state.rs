//! Shared application state.
//!
//! `AppState` is initialized once at startup and holds everything the
//! service layer needs: the connection pool, configuration, the
//! per-resource lock registry, and the gateway handles supplied by the
//! embedding application. All fields are cheap to clone or share.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    service::{
        admin::AdminService, availability::AvailabilityService, booking::BookingService,
        bus::BusService, locks::ResourceLocks, notification::NotificationGateway,
        notification::NotificationService, payment::PaymentGateway, payment::PaymentService,
        review::ReviewService, vehicle::VehicleService,
    },
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection is a pool handle and
/// the registries/gateways are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Loaded configuration (search radii, lifecycle policy).
    pub config: Config,

    /// Per-resource lock registry serializing booking mutations.
    pub locks: Arc<ResourceLocks>,

    /// Push/email delivery seam, best-effort only.
    pub notification_gateway: Arc<dyn NotificationGateway>,

    /// Payment processor seam, consumed at payment confirmation.
    pub payment_gateway: Arc<dyn PaymentGateway>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        config: Config,
        notification_gateway: Arc<dyn NotificationGateway>,
        payment_gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            db,
            config,
            locks: Arc::new(ResourceLocks::new()),
            notification_gateway,
            payment_gateway,
        }
    }

    pub fn availability(&self) -> AvailabilityService<'_> {
        AvailabilityService::new(&self.db, self.config.search)
    }

    pub fn bookings(&self) -> BookingService<'_> {
        BookingService::new(&self.db, &self.locks, self.config.policy, self.notifications())
    }

    pub fn notifications(&self) -> NotificationService {
        NotificationService::new(self.db.clone(), self.notification_gateway.clone())
    }

    pub fn payments(&self) -> PaymentService<'_> {
        PaymentService::new(&self.db, self.payment_gateway.clone())
    }

    pub fn reviews(&self) -> ReviewService<'_> {
        ReviewService::new(&self.db)
    }

    pub fn vehicles(&self) -> VehicleService<'_> {
        VehicleService::new(&self.db)
    }

    pub fn bus(&self) -> BusService<'_> {
        BusService::new(&self.db)
    }

    pub fn admin(&self) -> AdminService<'_> {
        AdminService::new(&self.db)
    }
}
