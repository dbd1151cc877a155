/// A task addressed by its folder and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRef {
    pub folder: String,
    pub task: String,
}

impl TaskRef {
    pub fn new(folder: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            task: task.into(),
        }
    }

    pub fn is(&self, folder: &str, task: &str) -> bool {
        self.folder == folder && self.task == task
    }
}

/// Which folder is expanded and whose status picker is open. Never saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub open_folder: Option<String>,
    pub open_dropdown: Option<TaskRef>,
}

/// Text typed into the "new folder" / "new task" inputs. Never saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDrafts {
    pub new_folder: String,
    pub new_task: String,
}

/// Where a pointer interaction landed, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionTarget {
    /// Inside the status picker of this task.
    StatusDropdown(TaskRef),
    Elsewhere,
}
