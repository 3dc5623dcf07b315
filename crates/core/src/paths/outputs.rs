//! Analysis output directory names.

/// Tables, model outputs and metrics.
#[derive(Debug, Clone, Copy)]
pub struct ResultsDir;

impl ResultsDir {
    pub const NAME: &'static str = "results";
}

/// Rendered plots.
#[derive(Debug, Clone, Copy)]
pub struct FiguresDir;

impl FiguresDir {
    pub const NAME: &'static str = "figures";
}
