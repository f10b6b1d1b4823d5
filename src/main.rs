use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use film_recs::{
    cli::{self, Args},
    config::Config,
};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the lists
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env().context("Failed to load config")?;

    let recommendations = cli::run(&args, config)
        .with_context(|| format!("Failed to recommend films for {}", args.user))?;

    print!("{}", recommendations);
    Ok(())
}
