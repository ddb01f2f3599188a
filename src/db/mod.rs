//! Connection abstraction the gateway is written against.
//!
//! `ConnectionProvider` is the only way the gateway reaches a store. The
//! SQLite backend lives in [`sqlite`]; tests plug in recording doubles.

pub mod schema;
pub mod sqlite;

use crate::error::Result;
use rusqlite::types::Value;

pub use sqlite::{SqliteConnection, SqliteProvider};

/// Hands out a fresh connection on every call.
pub trait ConnectionProvider {
    type Conn: StoreConnection;

    fn connect(&self) -> Result<Self::Conn>;
}

/// A live handle to the backing store.
pub trait StoreConnection {
    /// Prepare an insert with generated-key retrieval requested.
    fn prepare_insert(&self, sql: &str) -> Result<Box<dyn InsertStatement + '_>>;
}

/// A prepared insert with positional (1-based) parameters.
pub trait InsertStatement {
    fn bind(&mut self, index: usize, value: Value) -> Result<()>;

    /// Run the insert, returning the number of rows changed.
    fn execute_update(&mut self) -> Result<usize>;

    /// Row 1, column 1 of the generated-keys result, if the engine reported one.
    fn generated_key(&mut self) -> Result<Option<i64>>;
}
