//! taskrank CLI - a rank-ordered task list synced against a remote store.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use taskrank::{Engine, StoreClient, Task};

mod cli;

use cli::{Cli, Command};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskrank")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("taskrank.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn print_task(task: &Task) {
    println!(
        "{:>3}. {} {}",
        task.order_number,
        format!("#{}", task.id).cyan(),
        task.description
    );
}

fn print_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{}", "No tasks yet".dimmed());
    } else {
        for task in tasks {
            print_task(task);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = StoreClient::new(&cli.url).context("Failed to build store client")?;
    let mut engine = Engine::new(store);

    engine.load().await.context("Failed to load tasks")?;

    match cli.command {
        Command::Ls => {
            print_list(engine.tasks());
        }

        Command::Add { description } => match engine
            .add_task(&description)
            .await
            .context("Failed to add task")?
        {
            Some(task) => {
                println!(
                    "{} Added {} at rank {}: {}",
                    "✓".green(),
                    format!("#{}", task.id).cyan(),
                    task.order_number,
                    task.description
                );
            }
            None => {
                eprintln!("{} Nothing to add: description is empty", "✗".red());
                std::process::exit(1);
            }
        },

        Command::Rm { id } => {
            if engine.remove_task(id).await.context("Failed to remove task")? {
                println!("{} Removed {}", "✓".green(), format!("#{id}").cyan());
                print_list(engine.tasks());
            } else {
                eprintln!("{} Task not found: {}", "✗".red(), id);
                std::process::exit(1);
            }
        }

        Command::Edit { id, description } => {
            let Some(index) = engine.tasks().iter().position(|t| t.id == id) else {
                eprintln!("{} Task not found: {}", "✗".red(), id);
                std::process::exit(1);
            };

            engine.begin_edit(index);
            engine.edit_description(&description);
            engine.commit_edit().await.context("Failed to edit task")?;

            println!("{} Edited {}: {}", "✓".green(), format!("#{id}").cyan(), description);
        }

        Command::Move { id, target_id } => {
            engine.drag_start(id);
            engine.drag_enter(target_id);

            if engine.drop_dragged().await.context("Failed to move task")? {
                println!(
                    "{} Moved {} to the position of {}",
                    "✓".green(),
                    format!("#{id}").cyan(),
                    format!("#{target_id}").cyan()
                );
                print_list(engine.tasks());
            } else {
                println!("{}", "Nothing to move".dimmed());
            }
        }

        Command::Find { query } => {
            let hits = engine.filtered(&query);
            if hits.is_empty() {
                println!("{}", "No matching tasks".dimmed());
            } else {
                for task in hits {
                    print_task(task);
                }
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    let rt = tokio::runtime::Runtime::new().context("Failed to create runtime")?;
    if let Err(e) = rt.block_on(run(cli)) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
