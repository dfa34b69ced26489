/*
[INPUT]:  Optional YAML configuration file
[OUTPUT]: Client configuration and configured public/wallet clients
[POS]:    Configuration layer - endpoints, timeouts, session token
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::Context;
use lykke_adapter::{ClientConfig, LykkePublicApi, LykkeWalletApi};
use lykke_adapter::http::{PUBLIC_API_URL, WALLET_API_URL};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the command-line client
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Override of the public API host
    #[serde(default)]
    pub public_base_url: Option<String>,
    /// Override of the wallet API host
    #[serde(default)]
    pub wallet_base_url: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Session token sent with wallet requests
    #[serde(default)]
    pub token: Option<String>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            connect_timeout: self
                .connect_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn public_api(&self) -> anyhow::Result<LykkePublicApi> {
        let base_url = self.public_base_url.as_deref().unwrap_or(PUBLIC_API_URL);
        LykkePublicApi::with_config_and_base_url(self.client_config(), base_url)
            .context("create public API client")
    }

    pub fn wallet_api(&self) -> anyhow::Result<LykkeWalletApi> {
        let base_url = self.wallet_base_url.as_deref().unwrap_or(WALLET_API_URL);
        let mut wallet = LykkeWalletApi::with_config_and_base_url(self.client_config(), base_url)
            .context("create wallet API client")?;
        if let Some(token) = &self.token {
            wallet.set_token(token.clone());
        }
        Ok(wallet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: CliConfig = serde_yaml::from_str("{}").unwrap();
        let client_config = config.client_config();
        assert_eq!(client_config.timeout, Duration::from_secs(30));
        assert_eq!(client_config.connect_timeout, Duration::from_secs(10));

        let public = config.public_api().unwrap();
        assert_eq!(public.base_url().as_str(), "https://public-api.lykke.com/");
        let wallet = config.wallet_api().unwrap();
        assert!(wallet.token().is_none());
    }

    #[test]
    fn test_yaml_overrides() {
        let yaml = r#"
public_base_url: "http://localhost:9000"
wallet_base_url: "http://localhost:9001"
timeout_secs: 5
connect_timeout_secs: 2
user_agent: "lykke-cli/test"
token: "tok-1"
"#;
        let config: CliConfig = serde_yaml::from_str(yaml).unwrap();
        let client_config = config.client_config();
        assert_eq!(client_config.timeout, Duration::from_secs(5));
        assert_eq!(client_config.connect_timeout, Duration::from_secs(2));
        assert_eq!(client_config.user_agent.as_deref(), Some("lykke-cli/test"));

        let wallet = config.wallet_api().unwrap();
        assert_eq!(wallet.base_url().as_str(), "http://localhost:9001/");
        assert_eq!(wallet.token(), Some("tok-1"));
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        let config = CliConfig {
            public_base_url: Some("nope".to_string()),
            ..CliConfig::default()
        };
        let err = config.public_api().unwrap_err();
        assert!(err.to_string().contains("create public API client"));
    }
}
