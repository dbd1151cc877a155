use std::path::Path;

use serde_json::json;

use crate::error::TaskfoldersError;
use crate::models::STATUSES;
use crate::output;

pub fn run(json_output: bool, db: Option<&Path>) -> i32 {
    super::finish(run_inner(json_output, db), json_output)
}

fn run_inner(json_output: bool, db: Option<&Path>) -> Result<i32, TaskfoldersError> {
    let store = super::open_store(db)?;
    if json_output {
        output::json::print(&output::json::success(output::json::collection_json(
            store.collection(),
        )));
    } else {
        output::text::print_collection(store.collection());
    }
    Ok(0)
}

pub fn run_statuses(json_output: bool) -> i32 {
    if json_output {
        let statuses: Vec<_> = STATUSES.iter().map(output::json::status_info_json).collect();
        output::json::print(&output::json::success(json!({ "statuses": statuses })));
    } else {
        output::text::print_statuses(&STATUSES);
    }
    0
}
