pub use sea_orm_migration::prelude::*;

mod m20260210_000001_create_user_table;
mod m20260210_000002_create_vehicle_table;
mod m20260210_000003_create_detailing_service_table;
mod m20260210_000004_create_bus_agency_table;
mod m20260210_000005_create_bus_route_table;
mod m20260210_000006_create_bus_seat_table;
mod m20260211_000007_create_booking_table;
mod m20260211_000008_create_carsharing_booking_table;
mod m20260211_000009_create_detailing_booking_table;
mod m20260211_000010_create_bus_seat_booking_table;
mod m20260212_000011_create_review_table;
mod m20260212_000012_create_notification_table;
mod m20260212_000013_create_payment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260210_000001_create_user_table::Migration),
            Box::new(m20260210_000002_create_vehicle_table::Migration),
            Box::new(m20260210_000003_create_detailing_service_table::Migration),
            Box::new(m20260210_000004_create_bus_agency_table::Migration),
            Box::new(m20260210_000005_create_bus_route_table::Migration),
            Box::new(m20260210_000006_create_bus_seat_table::Migration),
            Box::new(m20260211_000007_create_booking_table::Migration),
            Box::new(m20260211_000008_create_carsharing_booking_table::Migration),
            Box::new(m20260211_000009_create_detailing_booking_table::Migration),
            Box::new(m20260211_000010_create_bus_seat_booking_table::Migration),
            Box::new(m20260212_000011_create_review_table::Migration),
            Box::new(m20260212_000012_create_notification_table::Migration),
            Box::new(m20260212_000013_create_payment_table::Migration),
        ]
    }
}
