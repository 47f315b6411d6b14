use {
    sea_orm::entity::prelude::*,
    serde::{Deserialize, Serialize},
};

/// An immutable wallet credit. One row per (beneficiary, chain event);
/// `kind` is always `bonus_parrainage` for rows written by this engine.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "ledger_transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub beneficiary_user_id: Uuid,
    pub kind: String,
    pub amount: String,
    pub level: i32,
    pub source_user_id: Uuid,
    pub source_pack_key: String,
    pub beneficiary_pack_key: String,
    pub percentage: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BeneficiaryUserId",
        to = "super::users::Column::Id"
    )]
    Beneficiary,
}

impl ActiveModelBehavior for ActiveModel {}
