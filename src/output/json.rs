use serde_json::{json, Value};

use crate::error::TaskfoldersError;
use crate::models::{Folder, StatusCode, StatusInfo, TaskCollection};

pub fn print(v: &Value) {
    match serde_json::to_string_pretty(v) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskfoldersError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn status_json(s: &StatusCode) -> Value {
    json!({
        "code": s.as_str(),
        "icon": s.icon(),
        "label": s.label(),
        "recognized": s.is_recognized()
    })
}

pub fn task_json(folder: &str, name: &str, status: &StatusCode) -> Value {
    json!({
        "folder": folder,
        "name": name,
        "status": status.as_str(),
        "icon": status.icon()
    })
}

pub fn folder_json(name: &str, folder: &Folder) -> Value {
    let tasks: Vec<_> = folder
        .iter()
        .map(|(task, record)| task_json(name, task, &record.status))
        .collect();
    json!({
        "name": name,
        "tasks": tasks
    })
}

pub fn folder_summary(name: &str, folder: &Folder) -> Value {
    json!({
        "name": name,
        "task_count": folder.len()
    })
}

pub fn collection_json(c: &TaskCollection) -> Value {
    let folders: Vec<_> = c.iter().map(|(name, f)| folder_json(name, f)).collect();
    json!({ "folders": folders })
}

pub fn status_info_json(info: &StatusInfo) -> Value {
    json!({
        "code": info.code,
        "icon": info.icon,
        "label": info.label
    })
}
