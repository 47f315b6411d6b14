use {
    crate::idens::{LedgerTransaction, Pack, ReferralEdge, User, Vendor},
    sea_orm_migration::{prelude::*, schema::*},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_uuid(User::Id))
                    .col(string(User::Name))
                    .col(
                        ColumnDef::new(User::Email)
                            .string()
                            .unique_key()
                            .not_null(),
                    )
                    .col(date_time(User::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vendor::Table)
                    .if_not_exists()
                    .col(pk_uuid(Vendor::UserId))
                    // Relation only, never an ownership edge; the sponsor may
                    // predate any referential integrity, so no foreign key.
                    .col(uuid_null(Vendor::SponsorId))
                    .col(string(Vendor::PackKey))
                    .col(string(Vendor::WalletBalance))
                    .col(date_time(Vendor::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pack::Table)
                    .if_not_exists()
                    .col(string(Pack::Key).primary_key())
                    .col(string(Pack::Price))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LedgerTransaction::Table)
                    .if_not_exists()
                    .col(pk_uuid(LedgerTransaction::Id))
                    .col(uuid(LedgerTransaction::BeneficiaryUserId))
                    .col(string(LedgerTransaction::Kind))
                    .col(string(LedgerTransaction::Amount))
                    .col(integer(LedgerTransaction::Level))
                    .col(uuid(LedgerTransaction::SourceUserId))
                    .col(string(LedgerTransaction::SourcePackKey))
                    .col(string(LedgerTransaction::BeneficiaryPackKey))
                    .col(string(LedgerTransaction::Percentage))
                    .col(date_time(LedgerTransaction::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReferralEdge::Table)
                    .if_not_exists()
                    .col(pk_uuid(ReferralEdge::Id))
                    .col(uuid(ReferralEdge::SponsorUserId))
                    .col(uuid(ReferralEdge::ReferredUserId))
                    .col(integer(ReferralEdge::Level))
                    .col(string_null(ReferralEdge::Bonus))
                    .col(string_null(ReferralEdge::Percentage))
                    .col(date_time(ReferralEdge::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Levels are unique per referred vendor; this is also the replay
        // guard for the ledger writer.
        manager
            .create_index(
                sea_query::Index::create()
                    .if_not_exists()
                    .name("referral_edges-referred_user_id-level")
                    .unique()
                    .table(ReferralEdge::Table)
                    .col(ReferralEdge::ReferredUserId)
                    .col(ReferralEdge::Level)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                sea_query::Index::create()
                    .if_not_exists()
                    .name("referral_edges-sponsor_user_id")
                    .table(ReferralEdge::Table)
                    .col(ReferralEdge::SponsorUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                sea_query::Index::create()
                    .if_not_exists()
                    .name("ledger_transactions-kind-beneficiary_user_id")
                    .table(LedgerTransaction::Table)
                    .col(LedgerTransaction::Kind)
                    .col(LedgerTransaction::BeneficiaryUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                sea_query::Index::create()
                    .if_not_exists()
                    .name("ledger_transactions-source_user_id")
                    .table(LedgerTransaction::Table)
                    .col(LedgerTransaction::SourceUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReferralEdge::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(LedgerTransaction::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Pack::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Vendor::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}
