mod app;
mod cli;
mod config;
mod effects;
mod logging;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let config = config::RunConfig::from_args(args);
    logging::initialize(&config.log);
    app::run(&config)?;
    Ok(())
}
