//! On-disk path definitions for project directories.
//!
//! This module defines relative filesystem paths under the project root.
//! It contains **no I/O logic** - only typed path construction.

pub mod data;
pub mod outputs;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::{PathsError, PathsResult};
use data::{DataDir, ProcessedDir, RawDir};
use outputs::{FiguresDir, ResultsDir};

/// One of the conventional project directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectDir {
    DataRaw,
    DataProcessed,
    Results,
    Figures,
}

impl ProjectDir {
    /// Every directory, in the order they are reported and provisioned.
    pub const ALL: [ProjectDir; 4] = [
        ProjectDir::DataRaw,
        ProjectDir::DataProcessed,
        ProjectDir::Results,
        ProjectDir::Figures,
    ];

    /// Returns the path of this directory relative to the project root.
    pub fn relative_path(self) -> PathBuf {
        match self {
            ProjectDir::DataRaw => PathBuf::from(DataDir::NAME).join(RawDir::NAME),
            ProjectDir::DataProcessed => PathBuf::from(DataDir::NAME).join(ProcessedDir::NAME),
            ProjectDir::Results => PathBuf::from(ResultsDir::NAME),
            ProjectDir::Figures => PathBuf::from(FiguresDir::NAME),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectDir::DataRaw => "data-raw",
            ProjectDir::DataProcessed => "data-processed",
            ProjectDir::Results => "results",
            ProjectDir::Figures => "figures",
        }
    }
}

impl fmt::Display for ProjectDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectDir {
    type Err = PathsError;

    /// Accepts `data-raw`, `data_raw`, `DATA-RAW` and so on.
    fn from_str(s: &str) -> PathsResult<Self> {
        let normalised = s.trim().to_ascii_lowercase().replace('_', "-");
        ProjectDir::ALL
            .into_iter()
            .find(|dir| dir.as_str() == normalised)
            .ok_or_else(|| PathsError::UnknownDir(s.to_string()))
    }
}
