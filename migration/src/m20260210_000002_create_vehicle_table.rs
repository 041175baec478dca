use sea_orm_migration::{prelude::*, schema::*};

use super::m20260210_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(integer(Vehicle::OwnerId))
                    .col(string(Vehicle::Make))
                    .col(string(Vehicle::Model))
                    .col(integer(Vehicle::Year))
                    .col(string_uniq(Vehicle::LicensePlate))
                    .col(string_null(Vehicle::Color))
                    .col(string(Vehicle::VehicleType))
                    .col(integer(Vehicle::SeatingCapacity))
                    .col(string_null(Vehicle::FuelType))
                    .col(string_null(Vehicle::Transmission))
                    .col(decimal_len_null(Vehicle::DailyRate, 10, 2))
                    .col(decimal_len_null(Vehicle::HourlyRate, 10, 2))
                    .col(boolean(Vehicle::IsAvailable).default(true))
                    .col(boolean(Vehicle::IsApproved).default(false))
                    .col(double_null(Vehicle::Latitude))
                    .col(double_null(Vehicle::Longitude))
                    .col(
                        timestamp(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Vehicle::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_owner_id")
                            .from(Vehicle::Table, Vehicle::OwnerId)
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
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    OwnerId,
    Make,
    Model,
    Year,
    LicensePlate,
    Color,
    VehicleType,
    SeatingCapacity,
    FuelType,
    Transmission,
    DailyRate,
    HourlyRate,
    IsAvailable,
    IsApproved,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}
