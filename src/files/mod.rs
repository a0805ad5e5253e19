mod collect;
mod text;

pub use collect::{collect_files, collect_subfolders};
pub use text::filter_text;

use std::path::{Component, Path};

/// `path` relative to `base`, with `/` separators on every platform.
pub fn relative_path(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
