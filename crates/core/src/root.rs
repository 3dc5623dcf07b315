//! Project root resolution.
//!
//! Two strategies are provided:
//! - a fixed-depth walk from the core crate's own manifest directory ([`project_root`]), which
//!   is independent of the process working directory but silently wrong if the crate moves;
//! - an upward search for [`ROOT_MARKER_FILE`] ([`find_root_by_marker`]).
//!
//! [`resolve_project_root`] chains an explicit override, the marker search and the fixed-depth
//! walk, and is intended to be called once at process startup.

use crate::constants::{ANCESTOR_DEPTH, ROOT_MARKER_FILE};
use crate::{PathsError, PathsResult};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Absolute manifest directory of this crate, fixed at build time.
fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Drops `.` segments and folds `..` into its parent without touching the filesystem.
///
/// `..` at the filesystem root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Resolves symlinks and `.`/`..` segments when the path exists. Otherwise the path is made
/// absolute against the working directory and normalized lexically.
fn resolve_lenient(path: &Path) -> PathsResult<PathBuf> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Ok(resolved);
    }
    let absolute = std::path::absolute(path).map_err(|source| PathsError::Canonicalize {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_lexically(&absolute))
}

/// Walks `depth` parents up from `anchor`.
///
/// The anchor is resolved leniently first, so a symlinked anchor yields the real ancestor.
/// No existence check is made on the result.
pub fn root_from_anchor(anchor: &Path, depth: usize) -> PathsResult<PathBuf> {
    let anchor = resolve_lenient(anchor)?;
    let root = anchor
        .ancestors()
        .nth(depth)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf);
    root.ok_or(PathsError::AncestorOutOfRange { anchor, depth })
}

/// Returns the project root as [`ANCESTOR_DEPTH`] parents above this crate's manifest directory.
pub fn project_root() -> PathsResult<PathBuf> {
    root_from_anchor(manifest_dir(), ANCESTOR_DEPTH)
}

/// Searches `start` and each of its ancestors for an entry named `marker`.
///
/// Returns the first directory containing the marker.
pub fn find_root_by_marker(start: &Path, marker: &str) -> PathsResult<PathBuf> {
    let start = resolve_lenient(start)?;
    for ancestor in start.ancestors() {
        if ancestor.join(marker).exists() {
            tracing::debug!("found {} in {}", marker, ancestor.display());
            return Ok(ancestor.to_path_buf());
        }
    }

    Err(PathsError::RootNotFound {
        marker: marker.to_string(),
        start,
    })
}

/// Resolve the project root without reading environment variables.
///
/// If `override_dir` is provided it must be an existing directory and is returned
/// canonicalized. Otherwise this searches upward from the core crate's manifest directory for
/// [`ROOT_MARKER_FILE`], and finally falls back to [`project_root`].
pub fn resolve_project_root(override_dir: Option<PathBuf>) -> PathsResult<PathBuf> {
    if let Some(root) = override_dir {
        if !root.is_dir() {
            return Err(PathsError::InvalidRoot(format!(
                "override {} is not an existing directory",
                root.display()
            )));
        }
        return fs::canonicalize(&root).map_err(|source| PathsError::Canonicalize {
            path: root,
            source,
        });
    }

    match find_root_by_marker(manifest_dir(), ROOT_MARKER_FILE) {
        Ok(root) => Ok(root),
        Err(e) => {
            let root = project_root()?;
            tracing::warn!(
                "{}; falling back to {} levels above the core crate: {}",
                e,
                ANCESTOR_DEPTH,
                root.display()
            );
            Ok(root)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_root_from_anchor_walks_fixed_depth() {
        let root = root_from_anchor(Path::new("/opt/proj/src/yelp_risk"), 2).unwrap();
        assert_eq!(root, PathBuf::from("/opt/proj"));
        assert_eq!(root.join("figures"), PathBuf::from("/opt/proj/figures"));
    }

    #[test]
    fn test_root_from_anchor_depth_zero_is_anchor() {
        let root = root_from_anchor(Path::new("/opt/proj"), 0).unwrap();
        assert_eq!(root, PathBuf::from("/opt/proj"));
    }

    #[test]
    fn test_root_from_anchor_too_shallow() {
        let err = root_from_anchor(Path::new("/opt"), 5).unwrap_err();
        assert!(matches!(err, PathsError::AncestorOutOfRange { depth: 5, .. }));
    }

    #[test]
    fn test_root_from_anchor_missing_anchor_folds_parent_segments() {
        let root = root_from_anchor(Path::new("/nonexistent-xyz/a/../b/c"), 2).unwrap();
        assert_eq!(root, PathBuf::from("/nonexistent-xyz"));
    }

    #[test]
    fn test_root_from_anchor_missing_relative_anchor_is_absolute() {
        let root = root_from_anchor(Path::new("no-such-dir-xyz/./src"), 1).unwrap();

        assert!(root.is_absolute());
        assert_eq!(root, std::env::current_dir().unwrap().join("no-such-dir-xyz"));
    }

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(normalize_lexically(Path::new("/a/./b/../c/")), PathBuf::from("/a/c"));
        assert_eq!(normalize_lexically(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_root_from_anchor_resolves_dot_segments_of_existing_anchor() {
        let temp = TempDir::new().unwrap();
        let base = fs::canonicalize(temp.path()).unwrap();
        fs::create_dir_all(base.join("src/pkg")).unwrap();

        let anchor = base.join("src/pkg/../pkg/.");
        let root = root_from_anchor(&anchor, 2).unwrap();

        assert_eq!(root, base);
    }

    #[cfg(unix)]
    #[test]
    fn test_root_from_anchor_follows_symlinks() {
        let temp = TempDir::new().unwrap();
        let base = fs::canonicalize(temp.path()).unwrap();
        let real = base.join("real");
        fs::create_dir_all(real.join("src/pkg")).unwrap();
        std::os::unix::fs::symlink(real.join("src/pkg"), base.join("link")).unwrap();

        let root = root_from_anchor(&base.join("link"), 2).unwrap();

        assert_eq!(root, real);
    }

    #[test]
    fn test_project_root_is_workspace_root() {
        let root = project_root().unwrap();
        assert!(root.is_absolute());
        assert!(root.join("crates").join("core").join("Cargo.toml").is_file());
    }

    #[test]
    fn test_project_root_is_idempotent() {
        assert_eq!(project_root().unwrap(), project_root().unwrap());
    }

    #[test]
    fn test_find_root_by_marker_in_ancestor() {
        let temp = TempDir::new().unwrap();
        let base = fs::canonicalize(temp.path()).unwrap();
        fs::write(base.join(ROOT_MARKER_FILE), "").unwrap();
        let nested = base.join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_root_by_marker(&nested, ROOT_MARKER_FILE).unwrap(), base);
    }

    #[test]
    fn test_find_root_by_marker_prefers_nearest() {
        let temp = TempDir::new().unwrap();
        let base = fs::canonicalize(temp.path()).unwrap();
        let inner = base.join("inner");
        fs::create_dir_all(inner.join("deeper")).unwrap();
        fs::write(base.join(ROOT_MARKER_FILE), "").unwrap();
        fs::write(inner.join(ROOT_MARKER_FILE), "").unwrap();

        let found = find_root_by_marker(&inner.join("deeper"), ROOT_MARKER_FILE).unwrap();

        assert_eq!(found, inner);
    }

    #[test]
    fn test_find_root_by_marker_not_found() {
        let temp = TempDir::new().unwrap();
        let marker = "definitely-not-present.marker-7f3a";

        let err = find_root_by_marker(temp.path(), marker).unwrap_err();

        assert!(matches!(err, PathsError::RootNotFound { marker: ref m, .. } if m == marker));
    }

    #[test]
    fn test_resolve_project_root_override() {
        let temp = TempDir::new().unwrap();
        let root = resolve_project_root(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(root, fs::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn test_resolve_project_root_override_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = resolve_project_root(Some(missing)).unwrap_err();

        assert!(matches!(err, PathsError::InvalidRoot(_)));
    }

    #[test]
    fn test_resolve_project_root_override_is_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "not a directory").unwrap();

        let err = resolve_project_root(Some(file)).unwrap_err();

        assert!(matches!(err, PathsError::InvalidRoot(_)));
    }

    #[test]
    fn test_resolve_project_root_default_finds_workspace() {
        let root = resolve_project_root(None).unwrap();
        assert!(root.is_absolute());
        assert!(root.join("crates").join("core").is_dir());
    }
}
