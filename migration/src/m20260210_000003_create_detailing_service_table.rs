use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DetailingService::Table)
                    .if_not_exists()
                    .col(pk_auto(DetailingService::Id))
                    .col(string(DetailingService::Name))
                    .col(text(DetailingService::Description))
                    .col(decimal_len(DetailingService::BasePrice, 10, 2))
                    .col(integer(DetailingService::DurationMinutes))
                    .col(boolean(DetailingService::IsActive).default(true))
                    .col(
                        timestamp(DetailingService::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(DetailingService::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DetailingService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DetailingService {
    Table,
    Id,
    Name,
    Description,
    BasePrice,
    DurationMinutes,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
