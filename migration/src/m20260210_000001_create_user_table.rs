use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string(User::Phone))
                    .col(boolean(User::IsAdmin).default(false))
                    .col(boolean(User::IsDriver).default(false))
                    .col(boolean(User::IsDetailingProvider).default(false))
                    .col(string_null(User::DriverLicense))
                    .col(boolean(User::DriverVerified).default(false))
                    .col(double(User::DriverRating).default(5.0))
                    .col(double(User::DetailingRating).default(5.0))
                    .col(integer(User::ServiceRadiusKm).default(10))
                    .col(text_null(User::DetailingBio))
                    .col(double_null(User::Latitude))
                    .col(double_null(User::Longitude))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    Phone,
    IsAdmin,
    IsDriver,
    IsDetailingProvider,
    DriverLicense,
    DriverVerified,
    DriverRating,
    DetailingRating,
    ServiceRadiusKm,
    DetailingBio,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}
