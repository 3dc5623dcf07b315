use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PathsError {
    #[error("invalid project root: {0}")]
    InvalidRoot(String),
    #[error(
        "could not locate project root: no {marker} found in {start} or any parent",
        start = start.display()
    )]
    RootNotFound { marker: String, start: PathBuf },
    #[error(
        "anchor {anchor} has fewer than {depth} parent directories",
        anchor = anchor.display()
    )]
    AncestorOutOfRange { anchor: PathBuf, depth: usize },
    #[error("failed to resolve {path}: {source}", path = path.display())]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to create directory {path}: {source}", path = path.display())]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown project directory: {0}")]
    UnknownDir(String),
}

pub type PathsResult<T> = std::result::Result<T, PathsError>;
