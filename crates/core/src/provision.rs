//! Directory provisioning.
//!
//! Path computation elsewhere in this crate performs no I/O. This module is the explicit,
//! fallible step that creates project directories on disk.

use crate::config::ProjectPaths;
use crate::paths::ProjectDir;
use crate::{PathsError, PathsResult};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of provisioning a single directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProvisionedDir {
    pub dir: ProjectDir,
    pub path: PathBuf,
    pub created: bool,
}

/// Outcome of [`provision`], one entry per project directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionReport {
    pub dirs: Vec<ProvisionedDir>,
}

impl ProvisionReport {
    /// Directories that did not exist before provisioning.
    pub fn created(&self) -> impl Iterator<Item = &ProvisionedDir> {
        self.dirs.iter().filter(|d| d.created)
    }
}

/// Ensures `path` exists as a directory, creating it and any missing parents.
///
/// Returns `true` if the directory was created, `false` if it already existed.
///
/// # Errors
/// - `PathsError::NotADirectory` if something other than a directory occupies `path`.
/// - `PathsError::DirCreation` if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> PathsResult<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    if path.exists() {
        return Err(PathsError::NotADirectory(path.to_path_buf()));
    }

    fs::create_dir_all(path).map_err(|source| PathsError::DirCreation {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Creates every project directory that does not already exist.
///
/// Stops at the first failure; directories created before the failure are left in place.
pub fn provision(paths: &ProjectPaths) -> PathsResult<ProvisionReport> {
    let mut report = ProvisionReport::default();

    for (dir, path) in paths.all() {
        let created = ensure_dir(&path)?;
        if created {
            tracing::info!("created {} directory: {}", dir, path.display());
        } else {
            tracing::debug!("{} directory already exists: {}", dir, path.display());
        }
        report.dirs.push(ProvisionedDir { dir, path, created });
    }

    Ok(report)
}
