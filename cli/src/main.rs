//! `todo`: command-line front end for the task API.
//!
//! The default server address is resolved once here, from `--server-url`
//! or `TODO_SERVER_URL`, and handed to the service as explicit configuration.

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use tasks_core::{Settings, Task, TaskId, TaskService};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Manage tasks on a remote task server")]
struct Cli {
    /// Base address of the task API; falls back to TODO_SERVER_URL.
    #[arg(long, global = true)]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all tasks in server order
    List,
    /// Add a new task
    Add { name: String },
    /// Replace a task's name and completion flag
    Update {
        id: TaskId,
        name: String,
        /// Mark the task as done (omit to mark it open)
        #[arg(long)]
        done: bool,
    },
    /// Delete a task
    Delete { id: TaskId },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = resolve_settings(cli.server_url)?;
    tracing::debug!(server_url = %settings.server_url, "resolved settings");

    let service = TaskService::new(settings.factory());
    run(&service, cli.command).await
}

/// `RUST_LOG` when set, `info` otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn resolve_settings(server_url: Option<String>) -> Result<Settings> {
    match server_url {
        Some(url) => Ok(Settings::new(url)),
        None => Settings::from_env().wrap_err("no server address; pass --server-url"),
    }
}

async fn run(service: &TaskService, command: Command) -> Result<()> {
    match command {
        Command::List => {
            let tasks = service.fetch_todos().await.wrap_err("failed to fetch tasks")?;
            if tasks.is_empty() {
                println!("no tasks");
            }
            for task in &tasks {
                println!("{}", render(task));
            }
        }
        Command::Add { name } => {
            let task = service.add_todo(&name).await.wrap_err("failed to add task")?;
            println!("added {}", render(&task));
        }
        Command::Update { id, name, done } => {
            let outcome = service
                .update_task(id, &name, done)
                .await
                .wrap_err_with(|| format!("failed to update task {id}"))?;
            match outcome.task() {
                Some(task) => println!("updated {}", render(task)),
                None => println!("updated task {id}"),
            }
        }
        Command::Delete { id } => {
            service
                .delete_task(id)
                .await
                .wrap_err_with(|| format!("failed to delete task {id}"))?;
            println!("deleted task {id}");
        }
    }
    Ok(())
}

fn render(task: &Task) -> String {
    let mark = if task.is_done { "x" } else { " " };
    format!("[{mark}] {:>4}  {}", task.id, task.name)
}
