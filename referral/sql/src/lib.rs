pub mod context;
pub mod entity;
pub mod error;
pub mod ledger;
pub mod registry;
pub mod reporter;
pub mod walker;

pub use {
    context::Context,
    error::{Error, Result},
};
