/*
[INPUT]:  Account email, password, partner id and optional session token
[OUTPUT]: Raw wallet API responses (version, account existence, auth)
[POS]:    HTTP layer - wallet client (bearer token attached when set)
[UPDATE]: When adding new wallet endpoints or changing auth headers
*/

use reqwest::Url;
use tracing::debug;

use crate::endpoints::wallet as endpoints;
use crate::http::client::{HttpTransport, WALLET_API_URL};
use crate::http::{ApiResponse, ClientConfig, Request, Result};
use crate::types::AuthRequest;

/// Client for the Lykke wallet API
#[derive(Debug, Clone)]
pub struct LykkeWalletApi {
    transport: HttpTransport,
}

impl LykkeWalletApi {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, WALLET_API_URL)
    }

    /// Create a client against another host (test servers, mirrors)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(&config, base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    /// Set the session token sent as `Authorization: Bearer` on every request
    pub fn set_token(&mut self, token: impl Into<String>) {
        debug!("wallet session token set");
        self.transport.set_bearer_token(Some(token.into()));
    }

    pub fn clear_token(&mut self) {
        self.transport.set_bearer_token(None);
    }

    pub fn token(&self) -> Option<&str> {
        self.transport.bearer_token()
    }

    /// Send an arbitrary request descriptor against this API
    pub async fn execute(&self, request: Request) -> Result<ApiResponse> {
        self.transport.execute(request).await
    }

    /// Get API version
    ///
    /// GET /home/Version
    pub async fn version(&self) -> Result<ApiResponse> {
        self.execute(endpoints::version()).await
    }

    /// Check whether an account exists
    ///
    /// GET /api/AccountExist?email={email}&partnerId={partnerId}
    pub async fn account_exist(
        &self,
        email: &str,
        partner_id: Option<&str>,
    ) -> Result<ApiResponse> {
        self.execute(endpoints::account_exist(email, partner_id)).await
    }

    /// Authenticate with email and password
    ///
    /// POST /api/Auth
    pub async fn auth(
        &self,
        email: &str,
        password: &str,
        client_info: Option<&str>,
        partner_id: Option<&str>,
    ) -> Result<ApiResponse> {
        let request = AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
            client_info: client_info.map(str::to_string),
            partner_id: partner_id.map(str::to_string),
        };
        self.auth_with(&request).await
    }

    /// Authenticate with a prepared request body
    pub async fn auth_with(&self, request: &AuthRequest) -> Result<ApiResponse> {
        self.execute(endpoints::auth(request)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::ClientConfig;
    use crate::types::{AccountExistResult, ApiEnvelope, AuthResult};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::LykkeWalletApi;

    fn client(server: &MockServer) -> LykkeWalletApi {
        LykkeWalletApi::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_account_exist() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/AccountExist"))
            .and(query_param("email", "user@example.com"))
            .and(query_param("partnerId", "partner-1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"Result":{"IsEmailRegistered":true},"Error":null}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .account_exist("user@example.com", Some("partner-1"))
            .await
            .expect("account_exist failed");

        let envelope: ApiEnvelope<AccountExistResult> = response.json().expect("decode envelope");
        assert_eq!(
            envelope.result,
            Some(AccountExistResult {
                is_email_registered: true
            })
        );
    }

    #[tokio::test]
    async fn test_auth_then_token_is_sent() {
        let server = MockServer::start().await;
        let _auth = Mock::given(method("POST"))
            .and(path("/api/Auth"))
            .and(body_json(serde_json::json!({
                "email": "user@example.com",
                "password": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"Result":{"KycStatus":"Ok","PinIsEntered":true,"Token":"tok-123","NotificationsId":"n-1"},"Error":null}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;
        let _version = Mock::given(method("GET"))
            .and(path("/home/Version"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"Version":"1.0.0"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut wallet = client(&server);
        let response = wallet
            .auth("user@example.com", "secret", None, None)
            .await
            .expect("auth failed");
        let envelope: ApiEnvelope<AuthResult> = response.json().expect("decode auth");
        let token = envelope.result.expect("auth result").token;

        wallet.set_token(token);
        assert_eq!(wallet.token(), Some("tok-123"));

        let response = wallet.version().await.expect("version failed");
        assert!(response.is_success());
    }
}
