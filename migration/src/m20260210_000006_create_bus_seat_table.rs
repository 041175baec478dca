use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260210_000001_create_user_table::User, m20260210_000005_create_bus_route_table::BusRoute,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusSeat::Table)
                    .if_not_exists()
                    .col(pk_auto(BusSeat::Id))
                    .col(integer(BusSeat::RouteId))
                    .col(string(BusSeat::SeatNumber))
                    .col(boolean(BusSeat::IsBooked).default(false))
                    .col(integer_null(BusSeat::BookedBy))
                    .col(timestamp_null(BusSeat::BookedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_seat_route_id")
                            .from(BusSeat::Table, BusSeat::RouteId)
                            .to(BusRoute::Table, BusRoute::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_seat_booked_by")
                            .from(BusSeat::Table, BusSeat::BookedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusSeat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusSeat {
    Table,
    Id,
    RouteId,
    SeatNumber,
    IsBooked,
    BookedBy,
    BookedAt,
}
