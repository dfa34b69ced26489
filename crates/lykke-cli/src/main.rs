/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Raw API response body on stdout, logs on stderr
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lykke_cli::{Cli, CliConfig, run};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => {
            info!(config_path = %path.display(), "loading configuration");
            load_config(path)?
        }
        None => CliConfig::default(),
    };

    let mut stdout = std::io::stdout().lock();
    run(&args.command, &config, &mut stdout).await
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &Path) -> Result<CliConfig> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
