use {
    sea_orm::entity::prelude::*,
    serde::{Deserialize, Serialize},
};

/// A vendor profile. `sponsor_id` points at another vendor's user id; it is
/// a relation only, never an ownership edge. `wallet_balance` is mutated
/// exclusively by the ledger writer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub sponsor_id: Option<Uuid>,
    pub pack_key: String,
    pub wallet_balance: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::packs::Entity",
        from = "Column::PackKey",
        to = "super::packs::Column::Key"
    )]
    Pack,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::packs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
