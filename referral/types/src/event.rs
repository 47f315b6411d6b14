use {bigdecimal::BigDecimal, uuid::Uuid};

/// One wallet credit produced by walking a sponsor chain: the ancestor
/// `beneficiary_user_id` at depth `level` is credited `bonus`, computed from
/// its own pack price.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerEvent {
    pub beneficiary_user_id: Uuid,
    pub level: u32,
    pub bonus: BigDecimal,
    pub percentage: BigDecimal,
    pub source_user_id: Uuid,
    pub source_pack_key: String,
    pub beneficiary_pack_key: String,
}
