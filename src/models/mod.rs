pub mod collection;
pub mod selection;
pub mod status;

pub use collection::*;
pub use selection::*;
pub use status::*;
