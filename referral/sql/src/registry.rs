use {
    crate::{entity, error::Result},
    sea_orm::{ConnectionTrait, EntityTrait},
    uuid::Uuid,
};

/// Vendor-registry read access. The sponsor pointer, active pack and wallet
/// balance all live on the vendor row; ownership of the record belongs to
/// the user-management subsystem.
pub async fn find_vendor<C>(db: &C, user_id: Uuid) -> Result<Option<entity::vendors::Model>>
where
    C: ConnectionTrait,
{
    Ok(entity::vendors::Entity::find_by_id(user_id).one(db).await?)
}

/// Pack-catalog lookup, read-only.
pub async fn find_pack<C>(db: &C, key: &str) -> Result<Option<entity::packs::Model>>
where
    C: ConnectionTrait,
{
    Ok(entity::packs::Entity::find_by_id(key.to_owned())
        .one(db)
        .await?)
}
