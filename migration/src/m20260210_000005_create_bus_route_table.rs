use sea_orm_migration::{prelude::*, schema::*};

use super::m20260210_000004_create_bus_agency_table::BusAgency;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusRoute::Table)
                    .if_not_exists()
                    .col(pk_auto(BusRoute::Id))
                    .col(integer(BusRoute::AgencyId))
                    .col(string(BusRoute::Origin))
                    .col(string(BusRoute::Destination))
                    .col(timestamp(BusRoute::DepartureTime))
                    .col(integer(BusRoute::AvailableSeats))
                    .col(decimal_len(BusRoute::Price, 10, 2))
                    .col(
                        timestamp(BusRoute::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(BusRoute::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_route_agency_id")
                            .from(BusRoute::Table, BusRoute::AgencyId)
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
            .drop_table(Table::drop().table(BusRoute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusRoute {
    Table,
    Id,
    AgencyId,
    Origin,
    Destination,
    DepartureTime,
    AvailableSeats,
    Price,
    CreatedAt,
    UpdatedAt,
}
