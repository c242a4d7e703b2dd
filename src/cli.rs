//! CLI argument parsing for taskrank.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tk",
    about = "A rank-ordered task list in the terminal",
    version,
    after_help = "Logs are written to: ~/.local/share/taskrank/logs/taskrank.log"
)]
pub struct Cli {
    /// Base URL of the task store API
    #[arg(
        short,
        long,
        global = true,
        env = "TASKRANK_URL",
        default_value = "http://localhost:3000/api"
    )]
    pub url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all tasks in rank order
    Ls,

    /// Add a new task at the end of the list
    Add {
        /// Task description
        description: String,
    },

    /// Remove a task and renumber its successors
    Rm {
        /// Task ID
        id: i64,
    },

    /// Replace a task's description
    Edit {
        /// Task ID
        id: i64,

        /// New description
        description: String,
    },

    /// Move a task to another task's position
    Move {
        /// Task to move
        id: i64,

        /// Task whose position it should take
        target_id: i64,
    },

    /// Show tasks whose description contains the query (case-insensitive)
    Find {
        /// Substring to search for
        query: String,
    },
}
