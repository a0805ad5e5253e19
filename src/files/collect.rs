use crate::errors::AgentError;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// One entry offered to the folder-selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub is_dir: bool,
}

// Depth-first, sorted by file name within each directory so that the order is
// stable across runs and platforms. Symlinks are never followed.
fn walk(root: &Path) -> WalkDir {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
}

fn walk_error(root: &Path, err: walkdir::Error) -> AgentError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    AgentError::io(path, err.into())
}

/// Runs a directory walk on the blocking pool.
async fn off_runtime<T, F>(root: &Path, walk_fn: F) -> Result<T, AgentError>
where
    T: Send + 'static,
    F: FnOnce(&Path) -> Result<T, AgentError> + Send + 'static,
{
    let owned = root.to_path_buf();
    tokio::task::spawn_blocking(move || walk_fn(&owned))
        .await
        .map_err(|e| AgentError::io(root, e.into()))?
}

/// Recursively lists every regular file under `root`. Directories and
/// symlinks are left out.
pub async fn collect_files(root: &Path) -> Result<Vec<PathBuf>, AgentError> {
    off_runtime(root, list_files).await
}

fn list_files(root: &Path) -> Result<Vec<PathBuf>, AgentError> {
    let mut files = Vec::new();
    for entry in walk(root) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    tracing::debug!(root = %root.display(), count = files.len(), "collected files");
    Ok(files)
}

fn is_ignored(entry: &DirEntry, ignore: &[String]) -> bool {
    let name = entry.file_name().to_string_lossy();
    ignore.iter().any(|i| *i == name)
}

/// Lists the folders under `root` that a request could refer to: every
/// directory below `root`, each followed by the files and directories inside
/// it. Files sitting directly in `root` are not candidates. Entries whose
/// base name is in `ignore` are pruned together with their contents.
pub async fn collect_subfolders(
    root: &Path,
    ignore: &[String],
) -> Result<Vec<Candidate>, AgentError> {
    let ignore = ignore.to_vec();
    off_runtime(root, move |root| list_subfolders(root, &ignore)).await
}

fn list_subfolders(root: &Path, ignore: &[String]) -> Result<Vec<Candidate>, AgentError> {
    let mut candidates = Vec::new();
    let walker = walk(root)
        .into_iter()
        .filter_entry(|e| !is_ignored(e, ignore));
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        let ft = entry.file_type();
        if ft.is_symlink() || (entry.depth() == 1 && !ft.is_dir()) {
            continue;
        }
        candidates.push(Candidate {
            is_dir: ft.is_dir(),
            path: entry.into_path(),
        });
    }
    tracing::debug!(root = %root.display(), count = candidates.len(), "collected candidate folders");
    Ok(candidates)
}
