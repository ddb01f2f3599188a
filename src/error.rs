use std::path::PathBuf;
use thiserror::Error;

/// Every failure the persistence layer can report.
///
/// Callers see one category; the variant only says which step of the
/// insert-then-read-key sequence gave up.
#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("Cannot open store at {path}: {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Cannot prepare `{sql}`: {source}")]
    Prepare {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Cannot bind parameter {index}: {source}")]
    Bind {
        index: usize,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Insert failed: {0}")]
    Execute(#[source] rusqlite::Error),

    #[error("No generated key returned for insert into {table}")]
    NoGeneratedKey { table: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),
}

impl DataAccessError {
    /// True when the engine refused the row (foreign key, NOT NULL, CHECK, ...).
    pub fn is_constraint_violation(&self) -> bool {
        let source = match self {
            DataAccessError::Execute(e) | DataAccessError::Db(e) => e,
            _ => return false,
        };
        matches!(
            source.sqlite_error_code(),
            Some(rusqlite::ErrorCode::ConstraintViolation)
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DataAccessError>;

/// Errors surfaced by the command-line front end
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] DataAccessError),

    #[error("Store not initialized. Run `taskstore init` first.")]
    NotInitialized,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_generated_key_message() {
        let err = DataAccessError::NoGeneratedKey { table: "Users" };
        assert_eq!(
            err.to_string(),
            "No generated key returned for insert into Users"
        );
    }

    #[test]
    fn test_constraint_violation_detection() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t (id INTEGER PRIMARY KEY, v TEXT NOT NULL)", [])
            .unwrap();
        let e = conn
            .execute("INSERT INTO t (v) VALUES (NULL)", [])
            .unwrap_err();

        assert!(DataAccessError::Execute(e).is_constraint_violation());
        assert!(!DataAccessError::InvalidInput("x".into()).is_constraint_violation());
    }
}
