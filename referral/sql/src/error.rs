use {thiserror::Error, uuid::Uuid};

#[derive(Debug, Error)]
pub enum Error {
    #[error("sea_orm error: {0}")]
    SeaOrm(#[from] sea_orm::error::DbErr),

    #[error("invalid monetary amount: {0}")]
    Amount(#[from] bigdecimal::ParseBigDecimalError),

    #[error("unknown vendor: {0}")]
    UnknownVendor(Uuid),
}

pub type Result<T> = core::result::Result<T, Error>;
