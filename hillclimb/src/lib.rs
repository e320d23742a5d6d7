//! Library half of the `hillclimb` binary: configuration, the end-to-end
//! run, and report formatting.

pub mod cli;
pub mod config;
pub mod report;
pub mod run;

pub use cli::Cli;
pub use config::RunConfig;
pub use report::Report;
pub use run::{RunError, load, run, solve};
