use std::io;
use std::path::Path;

use serde_json::json;

use crate::cli::commands::FolderCommands;
use crate::error::TaskfoldersError;
use crate::output;
use crate::store::{AssumeYes, Confirm, FolderAdded, PromptConfirm};

pub fn run(cmd: FolderCommands, json_output: bool, db: Option<&Path>) -> i32 {
    let result = match cmd {
        FolderCommands::Add { name } => run_add(name.as_deref(), json_output, db),
        FolderCommands::Delete { name, yes } => run_delete(&name, yes, json_output, db),
        FolderCommands::List => run_list(json_output, db),
    };
    super::finish(result, json_output)
}

fn run_add(
    name: Option<&str>,
    json_output: bool,
    db: Option<&Path>,
) -> Result<i32, TaskfoldersError> {
    let mut store = super::open_store(db)?;
    let name = match store.add_folder(name)? {
        FolderAdded::Created(name) => name,
        FolderAdded::AlreadyExists(name) => return Err(TaskfoldersError::folder_exists(&name)),
    };

    if json_output {
        output::json::print(&output::json::success(json!({
            "folder": { "name": name }
        })));
    } else {
        println!("Created folder: {name}");
    }
    Ok(0)
}

fn run_delete(
    name: &str,
    yes: bool,
    json_output: bool,
    db: Option<&Path>,
) -> Result<i32, TaskfoldersError> {
    let mut store = super::open_store(db)?;
    let Some(folder) = store.collection().folder(name) else {
        return Err(TaskfoldersError::folder_not_found(name));
    };
    let task_count = folder.len();

    let stdin = io::stdin();
    let mut prompt = PromptConfirm::new(stdin.lock(), io::stderr());
    let confirm: &mut dyn Confirm = if yes { &mut AssumeYes } else { &mut prompt };
    let deleted = store.delete_folder(name, confirm)?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "deleted": deleted,
            "folder": { "name": name, "task_count": task_count }
        })));
    } else if deleted {
        println!("Deleted folder: {name} ({task_count} tasks)");
    } else {
        println!("Kept folder: {name}");
    }
    Ok(0)
}

fn run_list(json_output: bool, db: Option<&Path>) -> Result<i32, TaskfoldersError> {
    let store = super::open_store(db)?;
    if json_output {
        let folders: Vec<_> = store
            .collection()
            .iter()
            .map(|(name, f)| output::json::folder_summary(name, f))
            .collect();
        output::json::print(&output::json::success(json!({ "folders": folders })));
    } else {
        output::text::print_folder_list(store.collection());
    }
    Ok(0)
}
