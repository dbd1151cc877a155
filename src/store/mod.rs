pub mod adapter;
pub mod confirm;
pub mod task_store;

pub use adapter::{MemoryStorage, PersistenceAdapter};
pub use confirm::{AssumeYes, Confirm, PromptConfirm};
pub use task_store::{FolderAdded, TaskStore, STORAGE_KEY};
