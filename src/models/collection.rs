use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::status::StatusCode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub status: StatusCode,
}

impl TaskRecord {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }
}

/// Tasks of one folder, keyed by task name, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Folder {
    tasks: IndexMap<String, TaskRecord>,
}

impl Folder {
    pub fn get(&self, task: &str) -> Option<&TaskRecord> {
        self.tasks.get(task)
    }

    pub fn get_mut(&mut self, task: &str) -> Option<&mut TaskRecord> {
        self.tasks.get_mut(task)
    }

    /// Inserts or overwrites; an overwritten task keeps its position.
    pub fn insert(&mut self, task: impl Into<String>, record: TaskRecord) {
        self.tasks.insert(task.into(), record);
    }

    pub fn remove(&mut self, task: &str) -> Option<TaskRecord> {
        self.tasks.shift_remove(task)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TaskRecord)> {
        self.tasks.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Every folder, keyed by folder name. This is exactly the shape that is
/// saved: `{"<folder>": {"<task>": {"status": "<code>"}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCollection {
    folders: IndexMap<String, Folder>,
}

impl TaskCollection {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders.get(name)
    }

    pub fn folder_mut(&mut self, name: &str) -> Option<&mut Folder> {
        self.folders.get_mut(name)
    }

    pub fn contains_folder(&self, name: &str) -> bool {
        self.folders.contains_key(name)
    }

    pub fn task(&self, folder: &str, task: &str) -> Option<&TaskRecord> {
        self.folder(folder)?.get(task)
    }

    /// Smallest positive integer, as a string, not already used as a folder name.
    pub fn next_numeric_name(&self) -> String {
        let mut i: u64 = 1;
        while self.folders.contains_key(i.to_string().as_str()) {
            i += 1;
        }
        i.to_string()
    }

    /// Puts an empty folder at the front. Returns false if the name is taken.
    pub fn prepend_folder(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.folders.contains_key(&name) {
            return false;
        }
        self.folders.shift_insert(0, name, Folder::default());
        true
    }

    /// Existing folder, or a new empty one appended at the end.
    pub fn folder_or_insert(&mut self, name: &str) -> &mut Folder {
        self.folders.entry(name.to_string()).or_default()
    }

    pub fn remove_folder(&mut self, name: &str) -> Option<Folder> {
        self.folders.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Folder)> {
        self.folders.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
