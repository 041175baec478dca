use sea_orm::entity::prelude::*;

/// Catalog entry for a mobile detailing service.
///
/// `name` and `description` hold JSON-encoded per-language strings; the
/// core resolves them through `LocalizedText` at the presentation
/// boundary rather than here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "detailing_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub base_price: Decimal,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::detailing_booking::Entity")]
    DetailingBooking,
}

impl Related<super::detailing_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetailingBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
