mod event;
mod schedule;

pub use {
    event::LedgerEvent,
    schedule::{
        LEDGER_KIND_BONUS_PARRAINAGE, MAX_CHAIN_DEPTH, percentage_for_level, rate_for_level,
        round_amount,
    },
};
