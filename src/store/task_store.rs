use tracing::{debug, info, warn};

use crate::error::TaskfoldersError;
use crate::models::{
    InputDrafts, InteractionTarget, SelectionState, StatusCode, TaskCollection, TaskRecord,
    TaskRef,
};

use super::adapter::PersistenceAdapter;
use super::confirm::Confirm;

/// Storage key the whole collection is saved under.
pub const STORAGE_KEY: &str = "tasks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderAdded {
    Created(String),
    /// Nothing changed: a folder with this name was already there.
    AlreadyExists(String),
}

impl FolderAdded {
    pub fn name(&self) -> &str {
        match self {
            Self::Created(name) | Self::AlreadyExists(name) => name,
        }
    }
}

/// Owns the folders, their tasks and the transient selection state, and
/// writes the collection back to storage after every change.
///
/// When a write fails the in-memory change is kept and the error is
/// returned; the next successful write brings storage back in line.
pub struct TaskStore<A: PersistenceAdapter> {
    adapter: A,
    tasks: TaskCollection,
    selection: SelectionState,
    drafts: InputDrafts,
}

impl<A: PersistenceAdapter> TaskStore<A> {
    /// Reads the saved collection once. Missing or empty data means an
    /// empty store; unreadable data is an error, never silently replaced.
    pub fn load(adapter: A) -> Result<Self, TaskfoldersError> {
        let tasks = match adapter.get(STORAGE_KEY)? {
            Some(raw) if !raw.is_empty() => TaskCollection::from_json(&raw)?,
            _ => TaskCollection::default(),
        };
        info!(folders = tasks.len(), "loaded task collection");
        Ok(Self {
            adapter,
            tasks,
            selection: SelectionState::default(),
            drafts: InputDrafts::default(),
        })
    }

    pub fn collection(&self) -> &TaskCollection {
        &self.tasks
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn drafts(&self) -> &InputDrafts {
        &self.drafts
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }

    pub fn status(&self, folder: &str, task: &str) -> Option<&StatusCode> {
        self.tasks.task(folder, task).map(|t| &t.status)
    }

    pub fn set_new_folder_draft(&mut self, text: impl Into<String>) {
        self.drafts.new_folder = text.into();
    }

    pub fn set_new_task_draft(&mut self, text: impl Into<String>) {
        self.drafts.new_task = text.into();
    }

    fn persist(&mut self) -> Result<(), TaskfoldersError> {
        let raw = self.tasks.to_json()?;
        self.adapter.set(STORAGE_KEY, &raw)?;
        debug!(bytes = raw.len(), "saved task collection");
        Ok(())
    }

    /// Creates an empty folder at the front. A blank or missing name gets
    /// the smallest unused number ("1", "2", ...).
    pub fn add_folder(&mut self, name: Option<&str>) -> Result<FolderAdded, TaskfoldersError> {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => self.tasks.next_numeric_name(),
        };

        if !self.tasks.prepend_folder(name.clone()) {
            warn!(folder = %name, "folder already exists");
            return Ok(FolderAdded::AlreadyExists(name));
        }

        self.persist()?;
        self.selection.open_folder = Some(name.clone());
        self.drafts.new_folder.clear();
        Ok(FolderAdded::Created(name))
    }

    /// Removes a folder and all of its tasks once `confirm` agrees.
    /// Returns whether anything was removed.
    pub fn delete_folder(
        &mut self,
        name: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<bool, TaskfoldersError> {
        if !self.tasks.contains_folder(name) {
            return Ok(false);
        }
        let prompt = format!("Delete folder \"{name}\" and all of its tasks?");
        if !confirm.confirm(&prompt) {
            debug!(folder = %name, "folder deletion declined");
            return Ok(false);
        }

        self.tasks.remove_folder(name);
        if self.selection.open_folder.as_deref() == Some(name) {
            self.selection.open_folder = None;
        }
        self.persist()?;
        Ok(true)
    }

    pub fn toggle_folder(&mut self, name: &str) {
        if self.selection.open_folder.as_deref() == Some(name) {
            self.selection.open_folder = None;
        } else {
            self.selection.open_folder = Some(name.to_string());
        }
    }

    /// Adds (or resets to "a fazer") a task, creating the folder if needed.
    /// Returns the trimmed task name, or `None` when the name was blank.
    pub fn add_task(
        &mut self,
        folder: &str,
        task: &str,
    ) -> Result<Option<String>, TaskfoldersError> {
        let task = task.trim();
        if task.is_empty() {
            return Ok(None);
        }

        self.tasks
            .folder_or_insert(folder)
            .insert(task, TaskRecord::new(StatusCode::ToDo));
        self.drafts.new_task.clear();
        self.persist()?;
        Ok(Some(task.to_string()))
    }

    pub fn delete_task(&mut self, folder: &str, task: &str) -> Result<bool, TaskfoldersError> {
        let removed = self
            .tasks
            .folder_mut(folder)
            .and_then(|f| f.remove(task))
            .is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Sets a task's status to whatever was given. The open status picker
    /// is closed in every case.
    pub fn on_status_change(
        &mut self,
        folder: &str,
        task: &str,
        status: impl Into<StatusCode>,
    ) -> Result<bool, TaskfoldersError> {
        self.selection.open_dropdown = None;

        let Some(record) = self.tasks.folder_mut(folder).and_then(|f| f.get_mut(task)) else {
            return Ok(false);
        };
        record.status = status.into();
        self.persist()?;
        Ok(true)
    }

    pub fn toggle_dropdown(&mut self, folder: &str, task: &str) {
        let already_open = self
            .selection
            .open_dropdown
            .as_ref()
            .is_some_and(|open| open.is(folder, task));
        self.selection.open_dropdown = if already_open {
            None
        } else {
            Some(TaskRef::new(folder, task))
        };
    }

    /// Closes the open status picker unless the interaction hit inside it.
    pub fn on_outside_interaction(&mut self, target: &InteractionTarget) {
        let inside = match (target, &self.selection.open_dropdown) {
            (InteractionTarget::StatusDropdown(hit), Some(open)) => hit == open,
            _ => false,
        };
        if !inside {
            self.selection.open_dropdown = None;
        }
    }
}
