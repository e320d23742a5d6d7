//! One end-to-end run: read, build, search, report.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use hillclimb_core::{ElevationGrid, GridError};
use hillclimb_paths::{Direction, Walker, best_distance_with, search};
use log::{debug, info};

use crate::config::RunConfig;
use crate::report::Report;

/// Errors that can abort a run.
#[derive(Debug)]
pub enum RunError {
    /// The height map could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The height map is malformed.
    Grid { path: PathBuf, source: GridError },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "cannot read {}", path.display()),
            Self::Grid { path, .. } => write!(f, "bad height map in {}", path.display()),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid { source, .. } => Some(source),
        }
    }
}

/// Read and validate the height map named by `path`.
pub fn load(path: &Path) -> Result<ElevationGrid, RunError> {
    let text = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    text.parse().map_err(|source| RunError::Grid {
        path: path.to_path_buf(),
        source,
    })
}

/// Run both searches on an already built grid.
pub fn solve(grid: &ElevationGrid, config: &RunConfig) -> Report {
    let started = Instant::now();

    let target = grid.target();
    let forward = Walker::new(grid, config.rule, Direction::Forward);
    let from_start = search(&forward, grid.start(), |c| c == target);
    debug!("from start {}: {from_start}", grid.start());

    let best = best_distance_with(grid, config.strategy, config.rule);
    debug!("best ({} strategy): {best}", config.strategy);

    let elapsed = started.elapsed();
    info!("searched {} grid in {elapsed:?}", grid.bounds());
    Report {
        from_start,
        best,
        strategy: config.strategy,
        elapsed_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
    }
}

/// Load the configured height map and solve it.
pub fn run(config: &RunConfig) -> Result<Report, RunError> {
    let grid = load(&config.input)?;
    info!(
        "loaded {} height map from {}",
        grid.bounds(),
        config.input.display()
    );
    Ok(solve(&grid, config))
}
