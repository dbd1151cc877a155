use std::path::Path;

use serde_json::json;

use crate::db::connection;
use crate::output;

pub fn run(json_output: bool, db: Option<&Path>) -> i32 {
    let result = connection::init_db(db).map(|path| {
        if json_output {
            output::json::print(&output::json::success(json!({
                "path": path.to_string_lossy()
            })));
        } else {
            println!("Initialized taskfolders at {}", path.display());
        }
        0
    });
    super::finish(result, json_output)
}
