mod args;
mod config;
mod main_lib;

use clap::Parser;

use args::Args;
use config::Config;
use main_lib::{init_tracing, run};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config.log_format);
    let args = Args::parse();

    let stdout = std::io::stdout();
    run(&config, &args, &mut stdout.lock())
}
