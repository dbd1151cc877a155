use clap::Parser;
use std::process;

use taskfolders::cli;
use taskfolders::cli::commands::{Cli, Commands};

fn main() {
    taskfolders::logging::init();

    let cli_args = Cli::parse();
    let json_output = cli_args.json;
    let db = cli_args.db.clone();
    let db = db.as_deref();

    let exit_code = match cli_args.command {
        Commands::Init => cli::init::run(json_output, db),
        Commands::List => cli::list::run(json_output, db),
        Commands::Statuses => cli::list::run_statuses(json_output),
        Commands::Folder(cmd) => cli::folder::run(cmd, json_output, db),
        Commands::Task(cmd) => cli::task::run(cmd, json_output, db),
        Commands::Shell => cli::shell::run(db),
    };

    process::exit(exit_code);
}
