pub mod index;
pub mod parrainages;
