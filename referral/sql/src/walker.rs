use {
    crate::{
        error::{Error, Result},
        registry,
    },
    bigdecimal::BigDecimal,
    referral_types::{
        LedgerEvent, MAX_CHAIN_DEPTH, percentage_for_level, rate_for_level, round_amount,
    },
    sea_orm::ConnectionTrait,
    std::{collections::HashSet, str::FromStr},
    uuid::Uuid,
};

/// Resolve the full sponsor chain of a newly onboarded vendor, producing one
/// ledger event per ancestor level (1 = direct sponsor), in chain order.
///
/// A missing ancestor or unresolvable pack terminates the walk at that
/// point; levels already produced stand. This is a degrade-gracefully
/// policy, not an error. Cycles in the sponsor graph and chains beyond
/// [`MAX_CHAIN_DEPTH`] terminate the walk the same way.
///
/// Errors only if the source vendor itself cannot be resolved, which is
/// rejected before any ledger write begins.
pub async fn walk_sponsor_chain<C>(db: &C, source_user_id: Uuid) -> Result<Vec<LedgerEvent>>
where
    C: ConnectionTrait,
{
    let source = registry::find_vendor(db, source_user_id)
        .await?
        .ok_or(Error::UnknownVendor(source_user_id))?;

    let mut events = Vec::new();
    let mut visited = HashSet::from([source_user_id]);
    let mut next_sponsor = source.sponsor_id;
    let mut level: u32 = 1;

    while let Some(sponsor_id) = next_sponsor {
        if !visited.insert(sponsor_id) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%sponsor_id, %source_user_id, "Cycle in sponsor chain, stopping walk");

            break;
        }

        if level > MAX_CHAIN_DEPTH {
            #[cfg(feature = "tracing")]
            tracing::warn!(%source_user_id, level, "Sponsor chain too deep, stopping walk");

            break;
        }

        let Some(ancestor) = registry::find_vendor(db, sponsor_id).await? else {
            break;
        };

        let Some(pack) = registry::find_pack(db, &ancestor.pack_key).await? else {
            break;
        };

        // The bonus scales with the ancestor's own pack price, not the new
        // recruit's. Intentional, inherited from the business rules.
        let price = BigDecimal::from_str(&pack.price)?;
        let bonus = round_amount(price * rate_for_level(level));

        events.push(LedgerEvent {
            beneficiary_user_id: sponsor_id,
            level,
            bonus,
            percentage: percentage_for_level(level),
            source_user_id,
            source_pack_key: source.pack_key.clone(),
            beneficiary_pack_key: ancestor.pack_key.clone(),
        });

        next_sponsor = ancestor.sponsor_id;
        level += 1;
    }

    Ok(events)
}
