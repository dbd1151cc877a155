#[allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let dir = TempDir::new().expect("create tempdir");
        Self { dir }
    }

    fn db_path(&self) -> PathBuf {
        self.dir.path().join(".taskfolders").join("taskfolders.db")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskfolders").expect("binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("TASKFOLDERS_DB");
        cmd.env_remove("TASKFOLDERS_LOG");
        cmd
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).output().expect("run");
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn run_ok(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], true, "expected success=true: {v}");
        v
    }

    fn run_err(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], false, "expected success=false: {v}");
        v
    }

    /// The raw string saved under the `tasks` key.
    fn saved(&self) -> Value {
        let conn = rusqlite::Connection::open(self.db_path()).expect("open db");
        let raw: String = conn
            .query_row("SELECT value FROM kv WHERE key = 'tasks'", [], |r| r.get(0))
            .expect("tasks key");
        serde_json::from_str(&raw).expect("saved JSON")
    }

    fn put_raw(&self, raw: &str) {
        let conn = rusqlite::Connection::open(self.db_path()).expect("open db");
        conn.execute(
            "INSERT INTO kv (key, value) VALUES ('tasks', ?1)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [raw],
        )
        .expect("write raw");
    }
}

fn folder_names(v: &Value) -> Vec<String> {
    v["data"]["folders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap().to_string())
        .collect()
}

// ─── 1. init ───────────────────────────────────────────────────────

#[test]
fn test_init() {
    let env = TestEnv::new();
    let v = env.run_ok(&["init"]);
    let path = v["data"]["path"].as_str().unwrap();
    assert!(path.ends_with(".taskfolders/taskfolders.db"));
    assert!(PathBuf::from(path).exists());
}

#[test]
fn test_init_idempotent() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["folder", "add", "Work"]);
    env.run_ok(&["init"]);
    let v = env.run_ok(&["list"]);
    assert_eq!(folder_names(&v), vec!["Work"]);
}

#[test]
fn test_init_required_before_commands() {
    let env = TestEnv::new();
    let v = env.run_err(&["list"]);
    assert_eq!(v["error"]["code"], "NOT_INITIALIZED");
}

#[test]
fn test_found_from_subdirectory() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["folder", "add", "Work"]);
    let sub = env.dir.path().join("a").join("b");
    std::fs::create_dir_all(&sub).unwrap();

    let output = env
        .cmd()
        .current_dir(&sub)
        .args(["list", "--json"])
        .output()
        .expect("run");
    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(folder_names(&v), vec!["Work"]);
}

#[test]
fn test_db_flag_and_env() {
    let env = TestEnv::new();
    let custom = env.dir.path().join("elsewhere.db");
    let custom_str = custom.to_str().unwrap();

    env.run_ok(&["init", "--db", custom_str]);
    assert!(custom.exists());
    env.run_ok(&["folder", "add", "Viagem", "--db", custom_str]);

    let output = env
        .cmd()
        .env("TASKFOLDERS_DB", custom_str)
        .args(["folder", "list", "--json"])
        .output()
        .expect("run");
    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(folder_names(&v), vec!["Viagem"]);

    // The default location was never initialized.
    let v = env.run_err(&["list"]);
    assert_eq!(v["error"]["code"], "NOT_INITIALIZED");
}

// ─── 2. folders ────────────────────────────────────────────────────

#[test]
fn test_folder_add_prepends() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["folder", "add", "Work"]);
    let v = env.run_ok(&["folder", "add", "Home"]);
    assert_eq!(v["data"]["folder"]["name"], "Home");

    let v = env.run_ok(&["folder", "list"]);
    assert_eq!(folder_names(&v), vec!["Home", "Work"]);
    assert_eq!(v["data"]["folders"][0]["task_count"], 0);
}

#[test]
fn test_folder_add_duplicate() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["folder", "add", "Work"]);
    let v = env.run_err(&["folder", "add", "Work"]);
    assert_eq!(v["error"]["code"], "FOLDER_EXISTS");

    let v = env.run_ok(&["folder", "list"]);
    assert_eq!(folder_names(&v), vec!["Work"]);
}

#[test]
fn test_folder_add_duplicate_is_logged() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["folder", "add", "Work"]);
    env.cmd()
        .args(["folder", "add", "Work"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("folder already exists"))
        .stderr(predicate::str::contains("Error: Folder 'Work' already exists"));
}

#[test]
fn test_folder_add_numbered() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    let names: Vec<String> = (0..3)
        .map(|_| {
            env.run_ok(&["folder", "add"])["data"]["folder"]["name"]
                .as_str()
                .unwrap()
                .to_string()
        })
        .collect();
    assert_eq!(names, vec!["1", "2", "3"]);

    env.run_ok(&["folder", "delete", "2", "--yes"]);
    let v = env.run_ok(&["folder", "add", "  "]);
    assert_eq!(v["data"]["folder"]["name"], "2");
}

#[test]
fn test_folder_delete_with_yes() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["task", "add", "Work", "Ship report"]);
    env.run_ok(&["folder", "add", "Home"]);

    let v = env.run_ok(&["folder", "delete", "Work", "--yes"]);
    assert_eq!(v["data"]["deleted"], true);
    assert_eq!(v["data"]["folder"]["task_count"], 1);
    assert_eq!(env.saved(), serde_json::json!({"Home": {}}));
}

#[test]
fn test_folder_delete_prompt_declined() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["task", "add", "Work", "Ship report"]);

    env.cmd()
        .args(["folder", "delete", "Work"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept folder: Work"))
        .stderr(predicate::str::contains("Delete folder \"Work\""));

    assert_eq!(
        env.saved(),
        serde_json::json!({"Work": {"Ship report": {"status": "a_fazer"}}})
    );
}

#[test]
fn test_folder_delete_prompt_accepted() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["folder", "add", "Work"]);

    env.cmd()
        .args(["folder", "delete", "Work"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted folder: Work"));

    assert_eq!(env.saved(), serde_json::json!({}));
}

#[test]
fn test_folder_delete_missing() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    let v = env.run_err(&["folder", "delete", "Nope", "--yes"]);
    assert_eq!(v["error"]["code"], "FOLDER_NOT_FOUND");
}

// ─── 3. tasks ──────────────────────────────────────────────────────

#[test]
fn test_work_scenario() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["folder", "add", "Work"]);
    let v = env.run_ok(&["task", "add", "Work", "Ship report"]);
    assert_eq!(v["data"]["task"]["name"], "Ship report");
    assert_eq!(v["data"]["task"]["status"], "a_fazer");
    assert_eq!(v["data"]["task"]["icon"], "📝");

    assert_eq!(
        env.saved(),
        serde_json::json!({"Work": {"Ship report": {"status": "a_fazer"}}})
    );
}

#[test]
fn test_task_add_trims_and_creates_folder() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["folder", "add", "Work"]);
    let v = env.run_ok(&["task", "add", "Errands", "  Buy milk  "]);
    assert_eq!(v["data"]["task"]["name"], "Buy milk");

    let v = env.run_ok(&["list"]);
    assert_eq!(folder_names(&v), vec!["Work", "Errands"]);
    assert_eq!(v["data"]["folders"][1]["tasks"][0]["name"], "Buy milk");
}

#[test]
fn test_task_add_blank() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    let v = env.run_err(&["task", "add", "Work", "   "]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
    let v = env.run_ok(&["list"]);
    assert!(v["data"]["folders"].as_array().unwrap().is_empty());
}

#[test]
fn test_task_add_delete_round_trip() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["task", "add", "Work", "keep"]);
    let before = env.saved();

    env.run_ok(&["task", "add", "Work", "temp"]);
    let v = env.run_ok(&["task", "delete", "Work", "temp"]);
    assert_eq!(v["data"]["deleted"]["name"], "temp");
    assert_eq!(env.saved(), before);
}

#[test]
fn test_task_delete_missing() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["task", "add", "Work", "keep"]);
    let v = env.run_err(&["task", "delete", "Work", "nope"]);
    assert_eq!(v["error"]["code"], "TASK_NOT_FOUND");
    let v = env.run_err(&["task", "delete", "Nope", "keep"]);
    assert_eq!(v["error"]["code"], "FOLDER_NOT_FOUND");
}

#[test]
fn test_task_status_known_and_unknown() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["task", "add", "Work", "Ship report"]);

    let v = env.run_ok(&["task", "status", "Work", "Ship report", "fazendo"]);
    assert_eq!(v["data"]["task"]["status"], "fazendo");
    assert_eq!(v["data"]["status"]["label"], "Fazendo");
    assert_eq!(v["data"]["status"]["recognized"], true);

    let v = env.run_ok(&["task", "status", "Work", "Ship report", "bloqueado"]);
    assert_eq!(v["data"]["task"]["status"], "bloqueado");
    assert_eq!(v["data"]["task"]["icon"], "❔");
    assert_eq!(v["data"]["status"]["recognized"], false);

    assert_eq!(
        env.saved(),
        serde_json::json!({"Work": {"Ship report": {"status": "bloqueado"}}})
    );
}

#[test]
fn test_task_status_missing() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    let v = env.run_err(&["task", "status", "Work", "x", "feito"]);
    assert_eq!(v["error"]["code"], "FOLDER_NOT_FOUND");
}

#[test]
fn test_task_list() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["task", "add", "Work", "b"]);
    env.run_ok(&["task", "add", "Work", "a"]);
    env.run_ok(&["task", "status", "Work", "a", "feito"]);

    let v = env.run_ok(&["task", "list", "Work"]);
    let tasks = v["data"]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["name"], "b");
    assert_eq!(tasks[1]["name"], "a");
    assert_eq!(tasks[1]["icon"], "✅");

    env.cmd()
        .args(["task", "list", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ a [Feito]"));
}

// ─── 4. saved data ─────────────────────────────────────────────────

#[test]
fn test_reads_previously_saved_data() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.put_raw(r#"{"Casa":{"Lavar":{"status":"feito"},"Ler":{"status":"urgente"}},"Work":{}}"#);

    let v = env.run_ok(&["list"]);
    assert_eq!(folder_names(&v), vec!["Casa", "Work"]);
    assert_eq!(v["data"]["folders"][0]["tasks"][1]["status"], "urgente");
    assert_eq!(v["data"]["folders"][0]["tasks"][1]["icon"], "❔");
}

#[test]
fn test_empty_saved_value_starts_empty() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.put_raw("");

    let v = env.run_ok(&["list"]);
    assert!(v["data"]["folders"].as_array().unwrap().is_empty());

    env.run_ok(&["folder", "add", "Work"]);
    assert_eq!(env.saved(), serde_json::json!({"Work": {}}));
}

#[test]
fn test_malformed_saved_data_is_not_replaced() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.put_raw("{\"Casa\": [");

    let v = env.run_err(&["folder", "add", "Work"]);
    assert_eq!(v["error"]["code"], "MALFORMED_STATE");

    let conn = rusqlite::Connection::open(env.db_path()).unwrap();
    let raw: String = conn
        .query_row("SELECT value FROM kv WHERE key = 'tasks'", [], |r| r.get(0))
        .unwrap();
    assert_eq!(raw, "{\"Casa\": [");
}

// ─── 5. statuses / shell ───────────────────────────────────────────

#[test]
fn test_statuses() {
    let env = TestEnv::new();
    let v = env.run_ok(&["statuses"]);
    let statuses = v["data"]["statuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 8);
    assert_eq!(statuses[0]["code"], "a_fazer");
    assert_eq!(statuses[7]["label"], "Anotação");
}

#[test]
fn test_shell_session() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);

    env.cmd()
        .arg("shell")
        .write_stdin("mkdir Work\nadd Ship report\npick Ship report\nset feito\nls\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("▾ Work (1)"))
        .stdout(predicate::str::contains("✅ Ship report"));

    assert_eq!(
        env.saved(),
        serde_json::json!({"Work": {"Ship report": {"status": "feito"}}})
    );
}
