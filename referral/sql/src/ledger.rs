use {
    crate::{
        entity,
        error::{Error, Result},
        walker,
    },
    bigdecimal::BigDecimal,
    referral_types::{LEDGER_KIND_BONUS_PARRAINAGE, LedgerEvent},
    sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
        DbBackend, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QuerySelect, Set,
        TransactionTrait,
    },
    std::str::FromStr,
    uuid::Uuid,
};

/// Apply the full referral chain for a newly registered vendor as one atomic
/// unit of work: for every ancestor level, credit the wallet, record the
/// ledger transaction and record the relationship edge. Returns the number
/// of levels credited.
///
/// Either the whole chain commits or none of it does; observers never see a
/// credited wallet without its paired rows, nor level N without level N-1.
pub async fn apply_registration(db: &DatabaseConnection, source_user_id: Uuid) -> Result<usize> {
    let txn = db.begin().await?;
    let levels = apply_registration_within(&txn, source_user_id).await?;
    txn.commit().await?;

    #[cfg(feature = "tracing")]
    tracing::info!(%source_user_id, levels, "Applied referral chain");

    Ok(levels)
}

/// Same as [`apply_registration`], but inside a caller-owned transaction, so
/// an enclosing signup workflow rolls the chain back together with its own
/// writes.
///
/// Replaying the same registration is a no-op returning 0: the chain is
/// keyed by the referred vendor, and the unique `(referred_user_id, level)`
/// index backs this at the constraint level.
pub async fn apply_registration_within(
    txn: &DatabaseTransaction,
    source_user_id: Uuid,
) -> Result<usize> {
    let existing = entity::referral_edges::Entity::find()
        .filter(entity::referral_edges::Column::ReferredUserId.eq(source_user_id))
        .count(txn)
        .await?;

    if existing > 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!(%source_user_id, "Referral chain already applied, skipping");

        return Ok(0);
    }

    let events = walker::walk_sponsor_chain(txn, source_user_id).await?;
    let now = chrono::Utc::now().naive_utc();

    for event in &events {
        credit_beneficiary(txn, event).await?;

        entity::ledger_transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            beneficiary_user_id: Set(event.beneficiary_user_id),
            kind: Set(LEDGER_KIND_BONUS_PARRAINAGE.to_owned()),
            amount: Set(event.bonus.to_string()),
            level: Set(event.level as i32),
            source_user_id: Set(event.source_user_id),
            source_pack_key: Set(event.source_pack_key.clone()),
            beneficiary_pack_key: Set(event.beneficiary_pack_key.clone()),
            percentage: Set(event.percentage.to_string()),
            created_at: Set(now),
        }
        .insert(txn)
        .await?;

        entity::referral_edges::ActiveModel {
            id: Set(Uuid::new_v4()),
            sponsor_user_id: Set(event.beneficiary_user_id),
            referred_user_id: Set(event.source_user_id),
            level: Set(event.level as i32),
            bonus: Set(Some(event.bonus.to_string())),
            percentage: Set(Some(event.percentage.to_string())),
            created_at: Set(now),
        }
        .insert(txn)
        .await?;
    }

    Ok(events.len())
}

/// Credit one beneficiary's wallet under an exclusive row lock, so two
/// overlapping chains crediting the same upline cannot lose an update.
async fn credit_beneficiary(txn: &DatabaseTransaction, event: &LedgerEvent) -> Result<()> {
    let mut query = entity::vendors::Entity::find_by_id(event.beneficiary_user_id);

    // sqlite has no `FOR UPDATE`; it serializes writers on its own.
    if matches!(
        txn.get_database_backend(),
        DbBackend::Postgres | DbBackend::MySql
    ) {
        query = query.lock_exclusive();
    }

    let vendor = query
        .one(txn)
        .await?
        .ok_or(Error::UnknownVendor(event.beneficiary_user_id))?;

    let balance = BigDecimal::from_str(&vendor.wallet_balance)?;
    let credited = (balance + event.bonus.clone()).with_scale(2);

    let mut vendor = vendor.into_active_model();
    vendor.wallet_balance = Set(credited.to_string());
    vendor.update(txn).await?;

    Ok(())
}
