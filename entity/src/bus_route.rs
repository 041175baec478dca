use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bus_routes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub agency_id: i32,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTimeUtc,
    pub available_seats: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bus_agency::Entity",
        from = "Column::AgencyId",
        to = "super::bus_agency::Column::Id"
    )]
    BusAgency,
    #[sea_orm(has_many = "super::bus_seat::Entity")]
    BusSeat,
}

impl Related<super::bus_agency::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusAgency.def()
    }
}

impl Related<super::bus_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusSeat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
