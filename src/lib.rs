pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod models;

pub use config::{StoreLocation, StoreOptions};
pub use db::{ConnectionProvider, InsertStatement, SqliteProvider, StoreConnection};
pub use error::{DataAccessError, Result};
pub use gateway::Gateway;
pub use models::*;
