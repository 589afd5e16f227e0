pub mod error;
pub mod file_info;
pub mod hub;
pub mod lister;

pub use error::{Error, Result};
pub use file_info::FileEntry;
pub use lister::{list_files, MetadataSource};
