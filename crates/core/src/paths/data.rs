//! Data directory names.
//!
//! Raw inputs and processed intermediates both live under a shared `data/` directory.

/// Top-level data directory.
#[derive(Debug, Clone, Copy)]
pub struct DataDir;

impl DataDir {
    pub const NAME: &'static str = "data";
}

/// Raw input data, as downloaded and never modified.
#[derive(Debug, Clone, Copy)]
pub struct RawDir;

impl RawDir {
    pub const NAME: &'static str = "raw";
}

/// Cleaned and derived datasets.
#[derive(Debug, Clone, Copy)]
pub struct ProcessedDir;

impl ProcessedDir {
    pub const NAME: &'static str = "processed";
}
