use sea_orm::entity::prelude::*;

/// Owner-listed vehicle available for peer-to-peer rental.
///
/// `is_available` is the single-occupancy exclusivity flag: it is flipped
/// off when a carsharing booking commits. `is_approved` gates the vehicle
/// out of search until an admin signs it off.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[sea_orm(unique)]
    pub license_plate: String,
    pub color: Option<String>,
    pub vehicle_type: String,
    pub seating_capacity: i32,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub daily_rate: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub hourly_rate: Option<Decimal>,
    pub is_available: bool,
    pub is_approved: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::carsharing_booking::Entity")]
    CarsharingBooking,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::carsharing_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarsharingBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
