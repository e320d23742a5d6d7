//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use hillclimb_paths::{ClimbRule, Strategy};

use crate::config::RunConfig;

#[derive(Parser, Debug)]
#[command(name = "hillclimb")]
#[command(about = "Fewest steps from the lowest ground to the summit of a height map")]
#[command(version)]
pub struct Cli {
    /// Height map: rows of a-z with one S (start) and one E (summit)
    pub input: PathBuf,

    /// Best-start strategy: reverse, naive (or parallel, if built with it)
    #[arg(long, default_value_t = Strategy::Reverse)]
    pub strategy: Strategy,

    /// Highest climb allowed in a single step
    #[arg(long, default_value_t = 1)]
    pub max_climb: u8,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            strategy: cli.strategy,
            rule: ClimbRule::new(cli.max_climb),
            json: cli.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["hillclimb", "map.txt"]).unwrap();
        let config = RunConfig::from(cli);
        assert_eq!(config, RunConfig::new("map.txt"));
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "hillclimb",
            "map.txt",
            "--strategy",
            "naive",
            "--max-climb",
            "3",
            "--json",
        ])
        .unwrap();
        let config = RunConfig::from(cli);
        assert_eq!(config.strategy, Strategy::Naive);
        assert_eq!(config.rule, ClimbRule::new(3));
        assert!(config.json);
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["hillclimb", "map.txt", "--strategy", "uphill"]).is_err());
    }

    #[test]
    fn requires_input() {
        assert!(Cli::try_parse_from(["hillclimb"]).is_err());
    }
}
