pub mod context;
pub mod error;
pub mod routes;
pub mod server;
