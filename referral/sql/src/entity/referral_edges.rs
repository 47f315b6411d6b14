use {
    sea_orm::entity::prelude::*,
    serde::{Deserialize, Serialize},
};

/// One sponsor-chain relationship recorded at registration time. For a given
/// referred vendor the levels form a contiguous ascending sequence starting
/// at 1; `(referred_user_id, level)` is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "referral_edges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub sponsor_user_id: Uuid,
    pub referred_user_id: Uuid,
    pub level: i32,
    pub bonus: Option<String>,
    pub percentage: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SponsorUserId",
        to = "super::users::Column::Id"
    )]
    Sponsor,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ReferredUserId",
        to = "super::users::Column::Id"
    )]
    Referred,
}

impl ActiveModelBehavior for ActiveModel {}
