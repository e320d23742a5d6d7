//! hillclimb — fewest steps from the lowest ground to the summit.

use std::io::Write;

use clap::Parser;
use hillclimb_lib::{Cli, RunConfig, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let config = RunConfig::from(Cli::parse());
    let report = run(&config)?;
    if config.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
        log::info!("elapsed: {:.3} ms", report.elapsed().as_secs_f64() * 1e3);
    }
    Ok(())
}
