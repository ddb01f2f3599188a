use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
}

/// A project owned by an existing user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub user_id: i64,
}

/// A task owned by an existing project.
///
/// `int_field_1` and `int_field_2` are stored as-is; their meaning belongs to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_finished: bool,
    #[serde(default)]
    pub int_field_1: i64,
    #[serde(default)]
    pub int_field_2: i64,
    pub project_id: i64,
}

impl NewTask {
    /// Unfinished task with both integer attributes at 0.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        project_id: i64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
            is_finished: false,
            int_field_1: 0,
            int_field_2: 0,
            project_id,
        }
    }

    pub fn finished(mut self, is_finished: bool) -> Self {
        self.is_finished = is_finished;
        self
    }

    pub fn int_fields(mut self, first: i64, second: i64) -> Self {
        self.int_field_1 = first;
        self.int_field_2 = second;
        self
    }
}

/// JSON envelope for a freshly generated id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavedId {
    pub id: i64,
}
