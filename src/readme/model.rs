use std::fmt;
use std::path::PathBuf;

/// Model-written summary of one file, keyed by its path relative to the
/// summarized folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub filename: String,
    pub summary: String,
}

/// A folder picked by the resolver. Always one of the enumerated candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFolder {
    /// `./`-prefixed, root-relative form shown to the model.
    pub relative: String,
    pub path: PathBuf,
}

impl fmt::Display for TargetFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative)
    }
}
