use super::{ConnectionProvider, InsertStatement, StoreConnection};
use crate::config::{StoreLocation, StoreOptions};
use crate::db::schema;
use crate::error::{DataAccessError, Result};
use rusqlite::types::Value;
use rusqlite::{Connection, Statement};

/// Opens a new SQLite connection per `connect` call
#[derive(Debug, Clone)]
pub struct SqliteProvider {
    location: StoreLocation,
    options: StoreOptions,
}

impl SqliteProvider {
    pub fn new(location: StoreLocation) -> Self {
        Self {
            location,
            options: StoreOptions::default(),
        }
    }

    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// Create the Users/Projects/Tasks tables if they are missing.
    pub fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        schema::init(conn.as_conn())
    }

    pub fn is_initialized(&self) -> Result<bool> {
        let conn = self.connect()?;
        schema::is_initialized(conn.as_conn())
    }
}

impl ConnectionProvider for SqliteProvider {
    type Conn = SqliteConnection;

    fn connect(&self) -> Result<SqliteConnection> {
        let path = self.location.as_path();
        let connect_err = |source| DataAccessError::Connect {
            path: path.to_path_buf(),
            source,
        };

        let conn = Connection::open(path).map_err(connect_err)?;

        // Let the engine enforce userId/projectId references
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(connect_err)?;
        conn.busy_timeout(self.options.busy_timeout)
            .map_err(connect_err)?;

        tracing::trace!(path = %path.display(), "opened connection");
        Ok(SqliteConnection { conn })
    }
}

/// Database connection wrapper
pub struct SqliteConnection {
    conn: Connection,
}

impl SqliteConnection {
    pub fn as_conn(&self) -> &Connection {
        &self.conn
    }
}

impl StoreConnection for SqliteConnection {
    fn prepare_insert(&self, sql: &str) -> Result<Box<dyn InsertStatement + '_>> {
        let stmt = self
            .conn
            .prepare(sql)
            .map_err(|source| DataAccessError::Prepare {
                sql: sql.to_string(),
                source,
            })?;

        Ok(Box::new(SqliteInsert {
            conn: &self.conn,
            stmt,
            key: None,
        }))
    }
}

struct SqliteInsert<'conn> {
    conn: &'conn Connection,
    stmt: Statement<'conn>,
    key: Option<i64>,
}

impl InsertStatement for SqliteInsert<'_> {
    fn bind(&mut self, index: usize, value: Value) -> Result<()> {
        self.stmt
            .raw_bind_parameter(index, value)
            .map_err(|source| DataAccessError::Bind { index, source })
    }

    fn execute_update(&mut self) -> Result<usize> {
        let changed = self.stmt.raw_execute().map_err(DataAccessError::Execute)?;
        // last_insert_rowid is only meaningful if this statement wrote a row
        self.key = (changed > 0).then(|| self.conn.last_insert_rowid());
        Ok(changed)
    }

    fn generated_key(&mut self) -> Result<Option<i64>> {
        Ok(self.key)
    }
}
