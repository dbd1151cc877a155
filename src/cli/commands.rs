use std::path::PathBuf;

use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "taskfolders",
    version = VERSION,
    about = "Organize tasks into folders, each with a status",
    after_help = "\
NOTE:
  Data lives in <dir>/.taskfolders/taskfolders.db, found by walking up from the
  current directory. Run `taskfolders init` first, or point --db / TASKFOLDERS_DB
  at a database file.

STATUSES:
  a_fazer fazendo feito cancelado adiado compromisso evento anotacao
  Any other text is accepted and shown with the unknown icon.

EXIT CODES:
  0  Success
  1  Error (not initialized, folder exists, not found, storage, etc.)

LOGGING:
  Set TASKFOLDERS_LOG (e.g. `debug`) to see diagnostics on stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Database file to use instead of the nearest .taskfolders directory
    #[arg(long, global = true, env = "TASKFOLDERS_DB")]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize taskfolders in this directory
    Init,

    /// Show every folder with its tasks
    List,

    /// Show the available statuses
    Statuses,

    /// Folder management
    #[command(subcommand)]
    Folder(FolderCommands),

    /// Task management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Interactive session (open folders, pick statuses)
    #[command(after_help = "\
NOTE:
  Reads commands from stdin, one per line. Type `help` inside the session.
  The open folder and open status picker last until the session ends.")]
    Shell,
}

#[derive(Subcommand)]
pub enum FolderCommands {
    /// Create a folder (first in the list). Without a name, the smallest free number is used.
    Add {
        name: Option<String>,
    },
    /// Delete a folder and all of its tasks
    Delete {
        name: String,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
    /// List folders
    List,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task (status a_fazer). The folder is created if missing.
    Add {
        folder: String,
        name: String,
    },
    /// Delete a task
    Delete {
        folder: String,
        name: String,
    },
    /// Set a task's status
    Status {
        folder: String,
        name: String,
        status: String,
    },
    /// List the tasks of a folder
    List {
        folder: String,
    },
}
