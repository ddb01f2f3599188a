//! Reference schema for the three tables the gateway writes to.

use crate::error::Result;
use rusqlite::Connection;

const TABLES: [&str; 3] = ["Users", "Projects", "Tasks"];

/// Create the tables if they do not exist yet. Safe to call repeatedly.
pub fn init(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS Users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS Projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            userId INTEGER NOT NULL REFERENCES Users(id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS Tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            dueDate TEXT,
            isFinished INTEGER NOT NULL DEFAULT 0 CHECK (isFinished IN (0, 1)),
            intField1 INTEGER NOT NULL DEFAULT 0,
            intField2 INTEGER NOT NULL DEFAULT 0,
            projectId INTEGER NOT NULL REFERENCES Projects(id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_projects_user_id ON Projects(userId)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_tasks_project_id ON Tasks(projectId)",
        [],
    )?;

    Ok(())
}

/// True when all three tables are present.
pub fn is_initialized(conn: &Connection) -> Result<bool> {
    let mut count = 0;
    for table in TABLES {
        let found: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )?;
        count += found;
    }
    Ok(count == TABLES.len() as i64)
}
