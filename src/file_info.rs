use crate::hub::repo_info::Sibling;

/// One file of a repository, as printed by the lister.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub size: u64,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, size: u64) -> FileEntry {
        FileEntry {
            path: path.into(),
            size,
        }
    }
}

impl From<Sibling> for FileEntry {
    fn from(sibling: Sibling) -> Self {
        // the hub leaves `size` out unless blobs were requested
        FileEntry {
            path: sibling.rfilename,
            size: sibling.size.unwrap_or(0),
        }
    }
}
