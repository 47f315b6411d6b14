use {
    crate::{entity, error::Result},
    bigdecimal::BigDecimal,
    chrono::NaiveDateTime,
    referral_types::LEDGER_KIND_BONUS_PARRAINAGE,
    sea_orm::{
        ColumnTrait, Condition, ConnectionTrait, EntityTrait, Order, PaginatorTrait, QueryFilter,
        QueryOrder,
    },
    serde::Serialize,
    std::{collections::HashMap, str::FromStr},
    uuid::Uuid,
};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A 1-indexed page of results. Requesting a page past the last yields an
/// empty page, never an error; a single-page result set lets the consumer
/// suppress pagination controls.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    fn new(data: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        Self {
            data,
            page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size.max(1)),
        }
    }
}

/// Identity projection resolved from the user store.
#[derive(Clone, Debug, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub nom: String,
    pub email: String,
}

impl From<&entity::users::Model> for Identity {
    fn from(user: &entity::users::Model) -> Self {
        Self {
            id: user.id,
            nom: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Admin projection of a relationship edge.
#[derive(Clone, Debug, Serialize)]
pub struct AdminRelation {
    pub id: Uuid,
    pub parrain: Option<Identity>,
    pub parrained: Option<Identity>,
    pub niveau: i32,
    pub cree_le: NaiveDateTime,
    pub bonus: Option<String>,
    pub pourcentage: Option<String>,
}

/// Vendor projection of the same edge; `parrain_direct` marks edges where
/// the viewing vendor is the level-1 sponsor.
#[derive(Clone, Debug, Serialize)]
pub struct VendorRelation {
    pub id: Uuid,
    pub parrain: Option<Identity>,
    pub parrained: Option<Identity>,
    pub niveau: i32,
    pub cree_le: NaiveDateTime,
    pub bonus: Option<String>,
    pub pourcentage: Option<String>,
    #[serde(rename = "parrainDirect")]
    pub parrain_direct: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorBonus {
    pub vendeur: Option<Identity>,
    pub total_bonus: String,
    pub pack: String,
}

/// All relationship edges, newest first — the admin reporting view.
pub async fn list_relations<C>(db: &C, page: u64, page_size: u64) -> Result<Page<AdminRelation>>
where
    C: ConnectionTrait,
{
    let page = page.max(1);
    let page_size = page_size.max(1);
    let paginator = entity::referral_edges::Entity::find()
        .order_by(entity::referral_edges::Column::CreatedAt, Order::Desc)
        .order_by(entity::referral_edges::Column::Level, Order::Asc)
        .paginate(db, page_size);

    let total_items = paginator.num_items().await?;

    // `fetch_page` multiplies page by page size internally; a page past the
    // end is answered with an empty page instead.
    let edges = if page > total_items.div_ceil(page_size) {
        Vec::new()
    } else {
        paginator.fetch_page(page - 1).await?
    };
    let identities = load_identities(db, &edges).await?;

    let data = edges
        .into_iter()
        .map(|edge| AdminRelation {
            id: edge.id,
            parrain: identities.get(&edge.sponsor_user_id).cloned(),
            parrained: identities.get(&edge.referred_user_id).cloned(),
            niveau: edge.level,
            cree_le: edge.created_at,
            bonus: edge.bonus,
            pourcentage: edge.percentage,
        })
        .collect();

    Ok(Page::new(data, page, page_size, total_items))
}

/// Relationship edges visible to one vendor: every edge where the vendor is
/// the sponsor or the referred party.
pub async fn list_vendor_relations<C>(
    db: &C,
    vendor_user_id: Uuid,
    page: u64,
    page_size: u64,
) -> Result<Page<VendorRelation>>
where
    C: ConnectionTrait,
{
    let page = page.max(1);
    let page_size = page_size.max(1);
    let paginator = entity::referral_edges::Entity::find()
        .filter(
            Condition::any()
                .add(entity::referral_edges::Column::SponsorUserId.eq(vendor_user_id))
                .add(entity::referral_edges::Column::ReferredUserId.eq(vendor_user_id)),
        )
        .order_by(entity::referral_edges::Column::CreatedAt, Order::Desc)
        .order_by(entity::referral_edges::Column::Level, Order::Asc)
        .paginate(db, page_size);

    let total_items = paginator.num_items().await?;
    let edges = if page > total_items.div_ceil(page_size) {
        Vec::new()
    } else {
        paginator.fetch_page(page - 1).await?
    };
    let identities = load_identities(db, &edges).await?;

    let data = edges
        .into_iter()
        .map(|edge| VendorRelation {
            id: edge.id,
            parrain: identities.get(&edge.sponsor_user_id).cloned(),
            parrained: identities.get(&edge.referred_user_id).cloned(),
            niveau: edge.level,
            cree_le: edge.created_at,
            bonus: edge.bonus,
            pourcentage: edge.percentage,
            parrain_direct: edge.sponsor_user_id == vendor_user_id && edge.level == 1,
        })
        .collect();

    Ok(Page::new(data, page, page_size, total_items))
}

/// Per-vendor bonus totals, grouped in insertion order of first appearance
/// (stable, not bonus-ranked).
pub async fn list_bonus_by_vendor<C>(db: &C, page: u64, page_size: u64) -> Result<Page<VendorBonus>>
where
    C: ConnectionTrait,
{
    let transactions = entity::ledger_transactions::Entity::find()
        .filter(entity::ledger_transactions::Column::Kind.eq(LEDGER_KIND_BONUS_PARRAINAGE))
        .order_by(entity::ledger_transactions::Column::CreatedAt, Order::Asc)
        .order_by(entity::ledger_transactions::Column::Level, Order::Asc)
        .all(db)
        .await?;

    let mut first_seen: Vec<Uuid> = Vec::new();
    let mut totals: HashMap<Uuid, (BigDecimal, String)> = HashMap::new();

    for tx in transactions {
        let amount = BigDecimal::from_str(&tx.amount)?;

        match totals.get_mut(&tx.beneficiary_user_id) {
            Some((total, _)) => *total += amount,
            None => {
                first_seen.push(tx.beneficiary_user_id);
                totals.insert(tx.beneficiary_user_id, (amount, tx.beneficiary_pack_key));
            },
        }
    }

    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_items = first_seen.len() as u64;

    // A page past the end is empty; computing its offset could overflow.
    let page_ids: Vec<Uuid> = if page > total_items.div_ceil(page_size) {
        Vec::new()
    } else {
        first_seen
            .into_iter()
            .skip(((page - 1) * page_size) as usize)
            .take(page_size as usize)
            .collect()
    };

    let users = entity::users::Entity::find()
        .filter(entity::users::Column::Id.is_in(page_ids.clone()))
        .all(db)
        .await?;
    let identities: HashMap<Uuid, Identity> =
        users.iter().map(|u| (u.id, Identity::from(u))).collect();

    let data = page_ids
        .into_iter()
        .filter_map(|id| {
            let (total, pack) = totals.remove(&id)?;

            Some(VendorBonus {
                vendeur: identities.get(&id).cloned(),
                total_bonus: total.with_scale(2).to_string(),
                pack,
            })
        })
        .collect();

    Ok(Page::new(data, page, page_size, total_items))
}

async fn load_identities<C>(
    db: &C,
    edges: &[entity::referral_edges::Model],
) -> Result<HashMap<Uuid, Identity>>
where
    C: ConnectionTrait,
{
    let ids: Vec<Uuid> = edges
        .iter()
        .flat_map(|edge| [edge.sponsor_user_id, edge.referred_user_id])
        .collect();

    let users = entity::users::Entity::find()
        .filter(entity::users::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(users.iter().map(|u| (u.id, Identity::from(u))).collect())
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_math() {
        let page = Page::new(vec![1, 2, 3], 3, 10, 23);
        assert_eq!(page.total_pages, 3);

        let page = Page::<i32>::new(vec![], 4, 10, 23);
        assert_eq!(page.total_pages, 3);
        assert!(page.data.is_empty());

        let page = Page::<i32>::new(vec![], 1, 10, 0);
        assert_eq!(page.total_pages, 0);
    }
}
