use clap::Parser;
use std::process;
use std::time::Duration;
use taskstore::{SqliteProvider, StoreLocation, StoreOptions};
use taskstore::cli::{Cli, Commands};
use taskstore::cli_handlers;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let location = cli
        .db
        .map(StoreLocation::new)
        .unwrap_or_else(StoreLocation::from_env);
    let options = cli
        .busy_timeout
        .map(|ms| StoreOptions {
            busy_timeout: Duration::from_millis(ms),
        })
        .unwrap_or_default();
    let provider = SqliteProvider::new(location).with_options(options);

    let result = match cli.command {
        Commands::Init => cli_handlers::handle_init(&provider),
        Commands::AddUser { name } => cli_handlers::handle_add_user(&provider, &name, cli.json),
        Commands::AddProject { title, desc, user } => {
            cli_handlers::handle_add_project(&provider, &title, &desc, user, cli.json)
        }
        Commands::AddTask {
            title,
            desc,
            due,
            project,
            finished,
            field1,
            field2,
        } => cli_handlers::handle_add_task(
            &provider,
            &title,
            &desc,
            due,
            project,
            finished,
            (field1, field2),
            cli.json,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
