use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260210_000001_create_user_table::User, m20260210_000002_create_vehicle_table::Vehicle,
    m20260211_000007_create_booking_table::Booking,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarsharingBooking::Table)
                    .if_not_exists()
                    .col(integer(CarsharingBooking::BookingId).primary_key())
                    .col(integer(CarsharingBooking::VehicleId))
                    .col(integer(CarsharingBooking::DriverId))
                    .col(string(CarsharingBooking::PickupAddress))
                    .col(double(CarsharingBooking::PickupLatitude))
                    .col(double(CarsharingBooking::PickupLongitude))
                    .col(string_null(CarsharingBooking::DropoffAddress))
                    .col(double_null(CarsharingBooking::DropoffLatitude))
                    .col(double_null(CarsharingBooking::DropoffLongitude))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_carsharing_booking_booking_id")
                            .from(CarsharingBooking::Table, CarsharingBooking::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_carsharing_booking_vehicle_id")
                            .from(CarsharingBooking::Table, CarsharingBooking::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_carsharing_booking_driver_id")
                            .from(CarsharingBooking::Table, CarsharingBooking::DriverId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarsharingBooking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CarsharingBooking {
    Table,
    BookingId,
    VehicleId,
    DriverId,
    PickupAddress,
    PickupLatitude,
    PickupLongitude,
    DropoffAddress,
    DropoffLatitude,
    DropoffLongitude,
}
