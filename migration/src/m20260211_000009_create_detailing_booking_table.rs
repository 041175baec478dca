use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260210_000001_create_user_table::User, m20260210_000002_create_vehicle_table::Vehicle,
    m20260210_000003_create_detailing_service_table::DetailingService,
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
                    .table(DetailingBooking::Table)
                    .if_not_exists()
                    .col(integer(DetailingBooking::BookingId).primary_key())
                    .col(integer(DetailingBooking::ServiceId))
                    .col(integer(DetailingBooking::ProviderId))
                    .col(integer(DetailingBooking::VehicleId))
                    .col(string(DetailingBooking::Address))
                    .col(double(DetailingBooking::Latitude))
                    .col(double(DetailingBooking::Longitude))
                    .col(text_null(DetailingBooking::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_detailing_booking_booking_id")
                            .from(DetailingBooking::Table, DetailingBooking::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_detailing_booking_service_id")
                            .from(DetailingBooking::Table, DetailingBooking::ServiceId)
                            .to(DetailingService::Table, DetailingService::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_detailing_booking_provider_id")
                            .from(DetailingBooking::Table, DetailingBooking::ProviderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_detailing_booking_vehicle_id")
                            .from(DetailingBooking::Table, DetailingBooking::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DetailingBooking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DetailingBooking {
    Table,
    BookingId,
    ServiceId,
    ProviderId,
    VehicleId,
    Address,
    Latitude,
    Longitude,
    Notes,
}
