use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusAgency::Table)
                    .if_not_exists()
                    .col(pk_auto(BusAgency::Id))
                    .col(string(BusAgency::Name))
                    .col(string_uniq(BusAgency::Email))
                    .col(string(BusAgency::Phone))
                    .col(boolean(BusAgency::Approved).default(false))
                    .col(
                        timestamp(BusAgency::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(BusAgency::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusAgency::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusAgency {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Approved,
    CreatedAt,
    UpdatedAt,
}
