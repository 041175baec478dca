use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260210_000004_create_bus_agency_table::BusAgency,
    m20260210_000005_create_bus_route_table::BusRoute,
    m20260210_000006_create_bus_seat_table::BusSeat,
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
                    .table(BusSeatBooking::Table)
                    .if_not_exists()
                    .col(integer(BusSeatBooking::BookingId).primary_key())
                    .col(integer(BusSeatBooking::RouteId))
                    .col(integer(BusSeatBooking::SeatId))
                    .col(integer(BusSeatBooking::AgencyId))
                    .col(text_null(BusSeatBooking::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_seat_booking_booking_id")
                            .from(BusSeatBooking::Table, BusSeatBooking::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_seat_booking_route_id")
                            .from(BusSeatBooking::Table, BusSeatBooking::RouteId)
                            .to(BusRoute::Table, BusRoute::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_seat_booking_seat_id")
                            .from(BusSeatBooking::Table, BusSeatBooking::SeatId)
                            .to(BusSeat::Table, BusSeat::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_seat_booking_agency_id")
                            .from(BusSeatBooking::Table, BusSeatBooking::AgencyId)
                            .to(BusAgency::Table, BusAgency::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusSeatBooking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusSeatBooking {
    Table,
    BookingId,
    RouteId,
    SeatId,
    AgencyId,
    Notes,
}
