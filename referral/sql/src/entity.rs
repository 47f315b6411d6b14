pub mod ledger_transactions;
pub mod packs;
pub mod referral_edges;
pub mod users;
pub mod vendors;
