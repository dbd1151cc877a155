use std::path::Path;

use serde_json::json;

use crate::cli::commands::TaskCommands;
use crate::db::SqliteStorage;
use crate::error::TaskfoldersError;
use crate::output;
use crate::store::TaskStore;

pub fn run(cmd: TaskCommands, json_output: bool, db: Option<&Path>) -> i32 {
    let result = match cmd {
        TaskCommands::Add { folder, name } => run_add(&folder, &name, json_output, db),
        TaskCommands::Delete { folder, name } => run_delete(&folder, &name, json_output, db),
        TaskCommands::Status { folder, name, status } => {
            run_status(&folder, &name, &status, json_output, db)
        }
        TaskCommands::List { folder } => run_list(&folder, json_output, db),
    };
    super::finish(result, json_output)
}

fn not_found(store: &TaskStore<SqliteStorage>, folder: &str, task: &str) -> TaskfoldersError {
    if store.collection().contains_folder(folder) {
        TaskfoldersError::task_not_found(folder, task)
    } else {
        TaskfoldersError::folder_not_found(folder)
    }
}

fn run_add(
    folder: &str,
    name: &str,
    json_output: bool,
    db: Option<&Path>,
) -> Result<i32, TaskfoldersError> {
    let mut store = super::open_store(db)?;
    let Some(name) = store.add_task(folder, name)? else {
        return Err(TaskfoldersError::validation("Task name must not be blank"));
    };
    let status = store.status(folder, &name).cloned().unwrap_or_default();

    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(folder, &name, &status)
        })));
    } else {
        println!("Added task: {name} (in {folder})");
    }
    Ok(0)
}

fn run_delete(
    folder: &str,
    name: &str,
    json_output: bool,
    db: Option<&Path>,
) -> Result<i32, TaskfoldersError> {
    let mut store = super::open_store(db)?;
    if !store.delete_task(folder, name)? {
        return Err(not_found(&store, folder, name));
    }

    if json_output {
        output::json::print(&output::json::success(json!({
            "deleted": { "folder": folder, "name": name }
        })));
    } else {
        println!("Deleted task: {name} (from {folder})");
    }
    Ok(0)
}

fn run_status(
    folder: &str,
    name: &str,
    status: &str,
    json_output: bool,
    db: Option<&Path>,
) -> Result<i32, TaskfoldersError> {
    let mut store = super::open_store(db)?;
    if !store.on_status_change(folder, name, status)? {
        return Err(not_found(&store, folder, name));
    }
    let Some(current) = store.status(folder, name) else {
        return Err(not_found(&store, folder, name));
    };

    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(folder, name, current),
            "status": output::json::status_json(current)
        })));
    } else {
        println!("{} {} → {}", current.icon(), name, current.label());
    }
    Ok(0)
}

fn run_list(folder: &str, json_output: bool, db: Option<&Path>) -> Result<i32, TaskfoldersError> {
    let store = super::open_store(db)?;
    let Some(f) = store.collection().folder(folder) else {
        return Err(TaskfoldersError::folder_not_found(folder));
    };

    if json_output {
        output::json::print(&output::json::success(output::json::folder_json(folder, f)));
    } else {
        output::text::print_folder(folder, f);
    }
    Ok(0)
}
