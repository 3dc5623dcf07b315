//! Constants used throughout the yelp-risk core crate.
//!
//! Root-resolution tunables live here so the fixed-depth assumption is defined in exactly one
//! place.

/// Number of parent directories between the core crate's manifest directory and the project
/// root (`crates/core` → workspace root).
pub const ANCESTOR_DEPTH: usize = 2;

/// File whose presence marks the project root during upward search.
pub const ROOT_MARKER_FILE: &str = ".yelp-risk-root";

/// Environment variable the binary reads to override the project root.
pub const ROOT_ENV_VAR: &str = "YELP_RISK_ROOT";
