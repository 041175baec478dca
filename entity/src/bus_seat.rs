use sea_orm::entity::prelude::*;

/// Single seat on a bus route.
///
/// `is_booked` flips false to true exactly once, atomically with the
/// booking row that references the seat.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bus_seats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub route_id: i32,
    pub seat_number: String,
    pub is_booked: bool,
    pub booked_by: Option<i32>,
    pub booked_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bus_route::Entity",
        from = "Column::RouteId",
        to = "super::bus_route::Column::Id"
    )]
    BusRoute,
}

impl Related<super::bus_route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusRoute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
