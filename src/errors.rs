use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("text service unavailable")]
    Unavailable,
    #[error("http error: {0}")]
    Http(String),
    #[error("other: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("found {count} candidate folders, at most {limit} are supported")]
    TooManyCandidates { count: usize, limit: usize },
    #[error("couldn't identify target folder: \"{0}\"")]
    UnresolvedFolder(String),
    #[error("folder must be a relative path inside the root: {}", .0.display())]
    FolderOutsideRoot(PathBuf),
    #[error("this directory already has a README.md file: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("found {count} text files, at most {limit} per folder are supported")]
    TooManyFiles { count: usize, limit: usize },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("text service failed: {0}")]
    Generate(#[from] GenerateError),
}

impl AgentError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
