//! Run configuration.

use std::path::PathBuf;

use hillclimb_paths::{ClimbRule, Strategy};

/// Everything a run needs besides the height map itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Height-map file to read.
    pub input: PathBuf,
    /// How to search for the best starting point.
    pub strategy: Strategy,
    pub rule: ClimbRule,
    /// Emit a JSON object instead of text.
    pub json: bool,
}

impl RunConfig {
    /// Default settings for `input`.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            strategy: Strategy::default(),
            rule: ClimbRule::default(),
            json: false,
        }
    }
}
