//! Fetch, sort and print the files of one hub repository.

use std::io::Write;

use crate::error::Result;
use crate::file_info::FileEntry;
use crate::hub::config::RepoType;
use crate::hub::repo_info::RepoInfo;

/// Anything that can answer a repository metadata query.
pub trait MetadataSource {
    fn repo_info(&self, repo_id: &str, repo_type: RepoType) -> Result<RepoInfo>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn repo_info(&self, repo_id: &str, repo_type: RepoType) -> Result<RepoInfo> {
        (**self).repo_info(repo_id, repo_type)
    }
}

/// Largest first. `sort_by` is stable, so equal sizes keep response order.
pub fn sort_by_size(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| b.size.cmp(&a.size));
}

pub fn fetch_entries<S: MetadataSource>(
    source: &S,
    repo_id: &str,
    repo_type: RepoType,
) -> Result<Vec<FileEntry>> {
    let info = source.repo_info(repo_id, repo_type)?;
    let mut entries: Vec<FileEntry> = info.siblings.into_iter().map(FileEntry::from).collect();
    sort_by_size(&mut entries);
    Ok(entries)
}

/// Paths of every file in the repository, largest first.
pub fn list_files<S: MetadataSource>(
    source: &S,
    repo_id: &str,
    repo_type: RepoType,
) -> Result<Vec<String>> {
    let entries = fetch_entries(source, repo_id, repo_type)?;
    Ok(entries.into_iter().map(|e| e.path).collect())
}

pub fn write_paths<W: Write, P: AsRef<str>>(out: &mut W, paths: &[P]) -> Result<()> {
    for path in paths {
        writeln!(out, "{}", path.as_ref())?;
    }
    Ok(())
}

/// Full run: nothing reaches `out` unless the fetch succeeded.
pub fn run<S: MetadataSource, W: Write>(
    source: &S,
    repo_id: &str,
    repo_type: RepoType,
    out: &mut W,
) -> Result<usize> {
    let paths = list_files(source, repo_id, repo_type)?;
    write_paths(out, &paths)?;
    out.flush()?;
    Ok(paths.len())
}
