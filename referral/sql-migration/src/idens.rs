use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    Email,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Vendor {
    #[sea_orm(iden = "vendors")]
    Table,
    UserId,
    SponsorId,
    PackKey,
    WalletBalance,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Pack {
    #[sea_orm(iden = "packs")]
    Table,
    Key,
    Price,
}

#[derive(DeriveIden)]
pub enum LedgerTransaction {
    #[sea_orm(iden = "ledger_transactions")]
    Table,
    Id,
    BeneficiaryUserId,
    Kind,
    Amount,
    Level,
    SourceUserId,
    SourcePackKey,
    BeneficiaryPackKey,
    Percentage,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum ReferralEdge {
    #[sea_orm(iden = "referral_edges")]
    Table,
    Id,
    SponsorUserId,
    ReferredUserId,
    Level,
    Bonus,
    Percentage,
    CreatedAt,
}
