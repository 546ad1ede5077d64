use anyhow::Result;
use clap::Parser;
use platewise::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = platewise::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    platewise::observability::init_observability(
        "platewise",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    cli::run(cli.command, config).await?;

    Ok(())
}
