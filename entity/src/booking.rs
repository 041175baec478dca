use sea_orm::entity::prelude::*;

/// Shared booking header. One row exists per booking of any kind; the
/// kind-specific payload lives in the matching variant table keyed by
/// `booking_id`.
///
/// `resource_id` identifies the conflict-checked resource for the row's
/// kind (vehicle id, provider id, or seat id), so overlap queries filter
/// this table alone. Bookings are never deleted; status transitions are
/// the only mutation after creation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub kind: String,
    pub resource_id: i32,
    pub status: String,
    pub start_time: DateTimeUtc,
    pub end_time: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_price: Decimal,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_one = "super::carsharing_booking::Entity")]
    CarsharingBooking,
    #[sea_orm(has_one = "super::detailing_booking::Entity")]
    DetailingBooking,
    #[sea_orm(has_one = "super::bus_seat_booking::Entity")]
    BusSeatBooking,
    #[sea_orm(has_one = "super::review::Entity")]
    Review,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::carsharing_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarsharingBooking.def()
    }
}

impl Related<super::detailing_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetailingBooking.def()
    }
}

impl Related<super::bus_seat_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusSeatBooking.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
