use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use stepgrid_lib::config::Config;
use stepgrid_lib::probe::{MemoryProbe, NoProbe, ProcStatusProbe};
use stepgrid_lib::runner::Runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    let probe: Box<dyn MemoryProbe> = if config.no_memory {
        Box::new(NoProbe)
    } else {
        Box::new(ProcStatusProbe::default())
    };
    let mut runner = Runner::new(io::stdout().lock(), probe, config.limits());

    match &config.input {
        Some(path) => runner.run(BufReader::new(File::open(path)?))?,
        None => runner.run(io::stdin().lock())?,
    };
    Ok(())
}
