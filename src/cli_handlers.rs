use crate::db::SqliteProvider;
use crate::error::CliError;
use crate::gateway::Gateway;
use crate::models::{NewTask, SavedId};
use chrono::NaiveDate;

/// Handle the init command
pub fn handle_init(provider: &SqliteProvider) -> Result<(), CliError> {
    let location = provider.location();

    if provider.is_initialized()? {
        println!(
            "Store already initialized at {}",
            location.as_path().display()
        );
        return Ok(());
    }

    provider.init_schema()?;
    println!("Initialized store at {}", location.as_path().display());
    Ok(())
}

/// Handle the add-user command
pub fn handle_add_user(provider: &SqliteProvider, name: &str, json: bool) -> Result<(), CliError> {
    let gateway = open_initialized(provider)?;
    let id = gateway.save_user(name)?;
    report("user", id, json)
}

/// Handle the add-project command
pub fn handle_add_project(
    provider: &SqliteProvider,
    title: &str,
    desc: &str,
    user: i64,
    json: bool,
) -> Result<(), CliError> {
    let gateway = open_initialized(provider)?;
    let id = gateway.save_project(title, desc, user)?;
    report("project", id, json)
}

/// Handle the add-task command
#[allow(clippy::too_many_arguments)]
pub fn handle_add_task(
    provider: &SqliteProvider,
    title: &str,
    desc: &str,
    due: NaiveDate,
    project: i64,
    finished: bool,
    fields: (i64, i64),
    json: bool,
) -> Result<(), CliError> {
    let gateway = open_initialized(provider)?;
    let task = NewTask::new(title, desc, due, project)
        .finished(finished)
        .int_fields(fields.0, fields.1);
    let id = gateway.save_task(&task)?;
    report("task", id, json)
}

fn open_initialized(provider: &SqliteProvider) -> Result<Gateway<SqliteProvider>, CliError> {
    if !provider.location().exists() {
        return Err(CliError::NotInitialized);
    }
    let gateway = Gateway::new(provider.clone());
    if !gateway.provider().is_initialized()? {
        return Err(CliError::NotInitialized);
    }
    Ok(gateway)
}

fn report(entity: &str, id: i64, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string(&SavedId { id })?);
    } else {
        println!("Created {entity} #{id}");
    }
    Ok(())
}
