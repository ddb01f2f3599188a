use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taskstore")]
#[command(about = "Store users, projects and tasks in SQLite")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Path to the store (defaults to $TASKSTORE_DB, then taskstore.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// How long to wait on a locked store, in milliseconds (default 5000)
    #[arg(long, global = true, value_name = "MS")]
    pub busy_timeout: Option<u64>,

    /// Print generated ids as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the Users, Projects and Tasks tables
    Init,

    /// Insert a user
    AddUser {
        /// User name
        name: String,
    },

    /// Insert a project owned by a user
    AddProject {
        /// Project title
        title: String,
        /// Project description
        #[arg(long, default_value = "")]
        desc: String,
        /// Owning user ID
        #[arg(long)]
        user: i64,
    },

    /// Insert a task owned by a project
    AddTask {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        desc: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: NaiveDate,
        /// Owning project ID
        #[arg(long)]
        project: i64,
        /// Mark the task as finished
        #[arg(long)]
        finished: bool,
        #[arg(long, default_value_t = 0)]
        field1: i64,
        #[arg(long, default_value_t = 0)]
        field2: i64,
    },
}
