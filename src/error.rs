use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    MalformedState,
    FolderExists,
    FolderNotFound,
    TaskNotFound,
    PersistenceUnavailable,
    ValidationError,
    DatabaseError,
    IoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::MalformedState => "MALFORMED_STATE",
            Self::FolderExists => "FOLDER_EXISTS",
            Self::FolderNotFound => "FOLDER_NOT_FOUND",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::PersistenceUnavailable => "PERSISTENCE_UNAVAILABLE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::IoError => "IO_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TaskfoldersError {
    pub code: ErrorCode,
    pub message: String,
}

impl TaskfoldersError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "taskfolders is not initialized. Run `taskfolders init` first.",
        )
    }

    pub fn malformed_state(detail: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::MalformedState,
            format!("Saved tasks could not be read: {detail}"),
        )
    }

    pub fn folder_exists(name: &str) -> Self {
        Self::new(
            ErrorCode::FolderExists,
            format!("Folder '{name}' already exists"),
        )
    }

    pub fn folder_not_found(name: &str) -> Self {
        Self::new(
            ErrorCode::FolderNotFound,
            format!("Folder not found: {name}"),
        )
    }

    pub fn task_not_found(folder: &str, task: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {task} (in folder {folder})"),
        )
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PersistenceUnavailable, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

impl From<rusqlite::Error> for TaskfoldersError {
    fn from(e: rusqlite::Error) -> Self {
        Self::database(e.to_string())
    }
}

impl From<std::io::Error> for TaskfoldersError {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorCode::IoError, e.to_string())
    }
}

impl From<serde_json::Error> for TaskfoldersError {
    fn from(e: serde_json::Error) -> Self {
        Self::malformed_state(e)
    }
}
