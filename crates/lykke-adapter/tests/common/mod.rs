/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for lykke-adapter tests

use lykke_adapter::{ClientConfig, LykkePublicApi, LykkeWalletApi};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Public client pointed at the mock server
#[allow(dead_code)]
pub fn public_client(server: &MockServer) -> LykkePublicApi {
    LykkePublicApi::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("public client init")
}

/// Wallet client pointed at the mock server
#[allow(dead_code)]
pub fn wallet_client(server: &MockServer) -> LykkeWalletApi {
    LykkeWalletApi::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("wallet client init")
}

/// Asset pair used across tests
#[allow(dead_code)]
pub const ASSET_PAIR: &str = "LKKEUR";
