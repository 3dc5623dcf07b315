//! # yelp-risk core
//!
//! Repo-relative directory resolution for the yelp-risk analysis project.
//!
//! The project root is located once and every conventional directory is composed from it:
//!
//! ```text
//! <root>/
//! ├── data/
//! │   ├── raw/
//! │   └── processed/
//! ├── results/
//! └── figures/
//! ```
//!
//! The zero-argument accessors ([`data_raw_dir`] and friends) recompute the root on every call
//! from this crate's own location and never depend on the current working directory. Processes
//! that want an explicit, overridable root should resolve a [`ProjectPaths`] at startup instead.
//!
//! Computing a path never creates or validates directories; creating them is the separate
//! [`provision()`] step.

pub mod config;
pub mod constants;
pub mod error;
pub mod paths;
pub mod provision;
pub mod root;

pub use config::ProjectPaths;
pub use error::{PathsError, PathsResult};
pub use paths::ProjectDir;
pub use provision::{ensure_dir, provision, ProvisionReport, ProvisionedDir};
pub use root::{find_root_by_marker, project_root, resolve_project_root, root_from_anchor};

use std::path::PathBuf;

fn project_dir(dir: ProjectDir) -> PathsResult<PathBuf> {
    Ok(project_root()?.join(dir.relative_path()))
}

/// `<root>/data/raw`
pub fn data_raw_dir() -> PathsResult<PathBuf> {
    project_dir(ProjectDir::DataRaw)
}

/// `<root>/data/processed`
pub fn data_processed_dir() -> PathsResult<PathBuf> {
    project_dir(ProjectDir::DataProcessed)
}

/// `<root>/results`
pub fn results_dir() -> PathsResult<PathBuf> {
    project_dir(ProjectDir::Results)
}

/// `<root>/figures`
pub fn figures_dir() -> PathsResult<PathBuf> {
    project_dir(ProjectDir::Figures)
}
