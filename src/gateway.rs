//! Persistence gateway: one insert per save, returning the generated id.

use crate::config::StoreLocation;
use crate::db::{ConnectionProvider, InsertStatement, SqliteProvider, StoreConnection};
use crate::error::{DataAccessError, Result};
use crate::models::{NewProject, NewTask, NewUser};
use rusqlite::types::Value;
use tracing::{debug, info, warn};

pub const INSERT_USER: &str = "INSERT INTO Users (name) VALUES (?)";

pub const INSERT_PROJECT: &str =
    "INSERT INTO Projects (title, description, userId) VALUES (?, ?, ?)";

pub const INSERT_TASK: &str = "INSERT INTO Tasks (title, description, dueDate, isFinished, intField1, intField2, projectId) VALUES (?, ?, ?, ?, ?, ?, ?)";

/// Storage form of a due date
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Create-only access to Users, Projects and Tasks.
///
/// Holds no connection between calls: every save asks the provider for a new
/// one and drops it before returning.
#[derive(Debug, Clone)]
pub struct Gateway<P> {
    provider: P,
}

impl Gateway<SqliteProvider> {
    /// Gateway over the SQLite file at `location`
    pub fn open(location: StoreLocation) -> Self {
        Self::new(SqliteProvider::new(location))
    }
}

impl<P: ConnectionProvider> Gateway<P> {
    pub fn new(provider: P) -> Self {
        Gateway { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn save_user(&self, name: &str) -> Result<i64> {
        if name.trim().is_empty() {
            return Err(DataAccessError::InvalidInput(
                "user name is required".to_string(),
            ));
        }
        self.insert("Users", INSERT_USER, vec![Value::Text(name.to_owned())])
    }

    /// The store, not the gateway, checks that `user_id` exists.
    pub fn save_project(&self, title: &str, description: &str, user_id: i64) -> Result<i64> {
        self.insert(
            "Projects",
            INSERT_PROJECT,
            vec![
                Value::Text(title.to_owned()),
                Value::Text(description.to_owned()),
                Value::Integer(user_id),
            ],
        )
    }

    pub fn save_task(&self, task: &NewTask) -> Result<i64> {
        self.insert(
            "Tasks",
            INSERT_TASK,
            vec![
                Value::Text(task.title.clone()),
                Value::Text(task.description.clone()),
                Value::Text(task.due_date.format(DATE_FORMAT).to_string()),
                Value::Integer(i64::from(task.is_finished)),
                Value::Integer(task.int_field_1),
                Value::Integer(task.int_field_2),
                Value::Integer(task.project_id),
            ],
        )
    }

    pub fn save_new_user(&self, user: &NewUser) -> Result<i64> {
        self.save_user(&user.name)
    }

    pub fn save_new_project(&self, project: &NewProject) -> Result<i64> {
        self.save_project(&project.title, &project.description, project.user_id)
    }

    fn insert(&self, table: &'static str, sql: &str, params: Vec<Value>) -> Result<i64> {
        let _span = tracing::debug_span!("insert", table).entered();

        let result = self.insert_and_fetch_key(table, sql, params);
        match &result {
            Ok(id) => info!(table, id, "row inserted"),
            Err(e) => warn!(table, error = %e, "insert failed"),
        }
        result
    }

    fn insert_and_fetch_key(
        &self,
        table: &'static str,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<i64> {
        let conn = self.provider.connect()?;
        let mut stmt = conn.prepare_insert(sql)?;

        debug!(params = params.len(), "binding parameters");
        for (i, value) in params.into_iter().enumerate() {
            stmt.bind(i + 1, value)?;
        }

        stmt.execute_update()?;
        stmt.generated_key()?
            .ok_or(DataAccessError::NoGeneratedKey { table })
    }
}
