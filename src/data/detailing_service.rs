use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct DetailingServiceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DetailingServiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a service definition by ID.
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::detailing_service::Model>, DbErr> {
        entity::prelude::DetailingService::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the active service catalog, in insertion order.
    pub async fn list_active(&self) -> Result<Vec<entity::detailing_service::Model>, DbErr> {
        entity::prelude::DetailingService::find()
            .filter(entity::detailing_service::Column::IsActive.eq(true))
            .order_by_asc(entity::detailing_service::Column::Id)
            .all(self.db)
            .await
    }
}
