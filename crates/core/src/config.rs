//! Project path configuration.
//!
//! [`ProjectPaths`] holds a project root that has been resolved once at process startup and is
//! then passed into whatever needs project directories. This keeps root discovery (which may
//! touch the filesystem) out of the code that only composes paths.

use crate::paths::ProjectDir;
use crate::root::{project_root, resolve_project_root};
use crate::{PathsError, PathsResult};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Project directories anchored at a resolved root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    /// Create a new `ProjectPaths` from an already-resolved root.
    ///
    /// The root must be absolute. No I/O is performed.
    pub fn new(root: PathBuf) -> PathsResult<Self> {
        if root.as_os_str().is_empty() {
            return Err(PathsError::InvalidRoot("root cannot be empty".into()));
        }
        if !root.is_absolute() {
            return Err(PathsError::InvalidRoot(format!(
                "root must be absolute, got {}",
                root.display()
            )));
        }

        Ok(Self { root })
    }

    /// Resolve the root via [`resolve_project_root`] and wrap it.
    pub fn resolve(override_dir: Option<PathBuf>) -> PathsResult<Self> {
        let root = resolve_project_root(override_dir)?;
        tracing::info!("project root: {}", root.display());
        Self::new(root)
    }

    /// Wrap the fixed-depth root from [`project_root`].
    pub fn module_anchored() -> PathsResult<Self> {
        Self::new(project_root()?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self, dir: ProjectDir) -> PathBuf {
        self.root.join(dir.relative_path())
    }

    pub fn data_raw_dir(&self) -> PathBuf {
        self.dir(ProjectDir::DataRaw)
    }

    pub fn data_processed_dir(&self) -> PathBuf {
        self.dir(ProjectDir::DataProcessed)
    }

    pub fn results_dir(&self) -> PathBuf {
        self.dir(ProjectDir::Results)
    }

    pub fn figures_dir(&self) -> PathBuf {
        self.dir(ProjectDir::Figures)
    }

    /// Every project directory paired with its absolute path, in [`ProjectDir::ALL`] order.
    pub fn all(&self) -> Vec<(ProjectDir, PathBuf)> {
        ProjectDir::ALL
            .into_iter()
            .map(|dir| (dir, self.dir(dir)))
            .collect()
    }
}
