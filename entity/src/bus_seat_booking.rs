use sea_orm::entity::prelude::*;

/// Bus seat payload for a booking header row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bus_seat_bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub booking_id: i32,
    pub route_id: i32,
    pub seat_id: i32,
    pub agency_id: i32,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id"
    )]
    Booking,
    #[sea_orm(
        belongs_to = "super::bus_route::Entity",
        from = "Column::RouteId",
        to = "super::bus_route::Column::Id"
    )]
    Route,
    #[sea_orm(
        belongs_to = "super::bus_seat::Entity",
        from = "Column::SeatId",
        to = "super::bus_seat::Column::Id"
    )]
    Seat,
    #[sea_orm(
        belongs_to = "super::bus_agency::Entity",
        from = "Column::AgencyId",
        to = "super::bus_agency::Column::Id"
    )]
    Agency,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
