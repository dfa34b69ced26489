/*
[INPUT]:  Parsed CLI arguments and loaded configuration
[OUTPUT]: Raw response body of the selected endpoint written to the output
[POS]:    Command layer - one subcommand per API operation
[UPDATE]: When adding subcommands or endpoints
*/

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use lykke_adapter::{ApiResponse, Period};
use tracing::info;

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "lykke-cli", version, about = "Command-line access to the Lykke public and wallet APIs")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// API version
    Version {
        /// Ask the wallet API instead of the public API
        #[arg(long)]
        wallet: bool,
    },
    /// Rates of all asset pairs, or of one pair
    Rates { asset_pair: Option<String> },
    /// Asset pairs dictionary
    AssetPairs,
    /// Rate history for one or several asset pairs
    RatesHistory {
        #[arg(long)]
        period: Period,
        /// RFC 3339 timestamp, e.g. 2017-11-11T13:43:35.723Z
        #[arg(long = "date-time")]
        date_time: DateTime<Utc>,
        #[arg(required = true)]
        asset_pairs: Vec<String>,
    },
    /// Assets dictionary
    Assets,
    /// Company ownership structure
    Ownership,
    /// Liveness check
    IsAlive,
    /// Trade volumes of all asset pairs, or of one pair
    Market { asset_pair: Option<String> },
    /// Market capitalization of an asset
    Capitalization { asset: String },
    /// All order books, or the books of one pair
    OrderBook { asset_pair: Option<String> },
    /// Last N trades
    Trades { count: u32 },
    /// Check whether an account exists
    AccountExist {
        email: String,
        #[arg(long)]
        partner_id: Option<String>,
    },
    /// Authenticate and print the session payload
    Auth {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        client_info: Option<String>,
        #[arg(long)]
        partner_id: Option<String>,
    },
}

impl Command {
    /// Subcommand name, safe to log (never includes arguments)
    pub fn name(&self) -> &'static str {
        match self {
            Command::Version { .. } => "version",
            Command::Rates { .. } => "rates",
            Command::AssetPairs => "asset-pairs",
            Command::RatesHistory { .. } => "rates-history",
            Command::Assets => "assets",
            Command::Ownership => "ownership",
            Command::IsAlive => "is-alive",
            Command::Market { .. } => "market",
            Command::Capitalization { .. } => "capitalization",
            Command::OrderBook { .. } => "order-book",
            Command::Trades { .. } => "trades",
            Command::AccountExist { .. } => "account-exist",
            Command::Auth { .. } => "auth",
        }
    }
}

/// Run one command and write the response body to `out`
pub async fn run<W: Write>(command: &Command, config: &CliConfig, out: &mut W) -> Result<()> {
    info!(command = command.name(), "running command");
    let response = dispatch(command, config)
        .await
        .with_context(|| format!("{} request", command.name()))?;
    info!(
        command = command.name(),
        status = %response.status(),
        bytes = response.body().len(),
        "command finished"
    );

    out.write_all(response.body()).context("write response body")?;
    writeln!(out).context("write response body")?;
    Ok(())
}

async fn dispatch(command: &Command, config: &CliConfig) -> Result<ApiResponse> {
    let response = match command {
        Command::Version { wallet: true } => config.wallet_api()?.version().await?,
        Command::Version { wallet: false } => config.public_api()?.version().await?,
        Command::Rates { asset_pair } => {
            config
                .public_api()?
                .asset_pairs_rates(asset_pair.as_deref())
                .await?
        }
        Command::AssetPairs => config.public_api()?.asset_pairs_dictionary().await?,
        Command::RatesHistory {
            period,
            date_time,
            asset_pairs,
        } => {
            let public = config.public_api()?;
            match asset_pairs.as_slice() {
                [] => bail!("at least one asset pair is required"),
                [single] => {
                    public
                        .asset_pair_rates_history(single, *period, date_time)
                        .await?
                }
                several => {
                    public
                        .asset_pairs_rates_history(several, *period, date_time)
                        .await?
                }
            }
        }
        Command::Assets => config.public_api()?.assets_dictionary().await?,
        Command::Ownership => config.public_api()?.company_ownership_structure().await?,
        Command::IsAlive => config.public_api()?.is_alive().await?,
        Command::Market { asset_pair } => config.public_api()?.market(asset_pair.as_deref()).await?,
        Command::Capitalization { asset } => {
            config.public_api()?.market_capitalization(asset).await?
        }
        Command::OrderBook { asset_pair } => {
            config
                .public_api()?
                .order_book(asset_pair.as_deref())
                .await?
        }
        Command::Trades { count } => config.public_api()?.trades(*count).await?,
        Command::AccountExist { email, partner_id } => {
            config
                .wallet_api()?
                .account_exist(email, partner_id.as_deref())
                .await?
        }
        Command::Auth {
            email,
            password,
            client_info,
            partner_id,
        } => {
            config
                .wallet_api()?
                .auth(
                    email,
                    password,
                    client_info.as_deref(),
                    partner_id.as_deref(),
                )
                .await?
        }
    };
    Ok(response)
}
