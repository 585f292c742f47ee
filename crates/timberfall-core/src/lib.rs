pub mod config;
pub mod constants;
pub mod error;
pub mod material;
pub mod neighborhood;
pub mod types;
