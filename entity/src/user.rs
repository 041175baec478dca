use sea_orm::entity::prelude::*;

/// Marketplace account: customer, vehicle owner (driver), or mobile
/// detailing provider. Role flags are additive; a single user may hold
/// several roles at once.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub is_admin: bool,
    pub is_driver: bool,
    pub is_detailing_provider: bool,
    pub driver_license: Option<String>,
    pub driver_verified: bool,
    /// Rolling mean of carsharing reviews targeting this user.
    pub driver_rating: f64,
    /// Rolling mean of detailing reviews targeting this user.
    pub detailing_rating: f64,
    /// Maximum distance in km this provider travels to a job.
    pub service_radius_km: i32,
    pub detailing_bio: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle::Entity")]
    Vehicle,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
