use sea_orm::entity::prelude::*;

/// Bus operator. Agencies register unapproved and only surface once an
/// admin approves them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bus_agencies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub approved: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bus_route::Entity")]
    BusRoute,
}

impl Related<super::bus_route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusRoute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
