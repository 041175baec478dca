use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring in-memory SQLite test
/// environments. Add entity tables, then call `build()` to create the
/// configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Vehicle};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Vehicle)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in
    /// dependency order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for booking operations across the three
    /// domains: users, the vehicle/detailing/bus inventory, the booking
    /// header, and the per-kind payload tables.
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User)
            .with_table(Vehicle)
            .with_table(DetailingService)
            .with_table(BusAgency)
            .with_table(BusRoute)
            .with_table(BusSeat)
            .with_table(Booking)
            .with_table(CarsharingBooking)
            .with_table(DetailingBooking)
            .with_table(BusSeatBooking)
    }

    /// Adds the booking tables plus reviews.
    pub fn with_review_tables(self) -> Self {
        self.with_booking_tables().with_table(Review)
    }

    /// Adds the booking tables plus notifications.
    pub fn with_notification_tables(self) -> Self {
        self.with_booking_tables().with_table(Notification)
    }

    /// Adds the booking tables plus payments.
    pub fn with_payment_tables(self) -> Self {
        self.with_booking_tables().with_table(Payment)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
