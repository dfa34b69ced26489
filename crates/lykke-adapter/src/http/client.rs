/*
[INPUT]:  HTTP configuration (base URL, timeouts, user agent, bearer token)
[OUTPUT]: Configured reqwest transport executing request descriptors
[POS]:    HTTP layer - core transport shared by the public and wallet clients
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, RequestBuilder, Url};
use std::time::Duration;
use tracing::{debug, warn};

use crate::http::{ApiResponse, LykkeError, Request, Result};

/// Base URL of the public market data API
pub const PUBLIC_API_URL: &str = "https://public-api.lykke.com";
/// Base URL of the wallet API
pub const WALLET_API_URL: &str = "https://api.lykkex.com";

/// Path prefix of regular API endpoints
pub const API_BASE_PATH: &str = "/api/";
/// Path prefix of the home endpoints (version lookup)
pub const HOME_BASE_PATH: &str = "/home/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: None,
        }
    }
}

/// Thin wrapper around `reqwest::Client` bound to one base URL
#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    http_client: Client,
    base_url: Url,
    bearer_token: Option<String>,
}

impl HttpTransport {
    pub(crate) fn new(config: &ClientConfig, base_url: &str) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: Url::parse(base_url)?,
            bearer_token: None,
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    pub(crate) fn set_bearer_token(&mut self, token: Option<String>) {
        self.bearer_token = token;
    }

    /// Turn a request descriptor into a reqwest builder
    pub(crate) fn build(&self, request: &Request) -> Result<RequestBuilder> {
        let url = request.url(&self.base_url)?;
        let mut builder = self.http_client.request(request.method.clone(), url);

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        if let Some(token) = &self.bearer_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| LykkeError::Config(format!("Invalid bearer token: {e}")))?;
            builder = builder.header(AUTHORIZATION, value);
        }
        Ok(builder)
    }

    /// Send a request and return the response unmodified; non-2xx is an error
    pub(crate) async fn execute(&self, request: Request) -> Result<ApiResponse> {
        let builder = self.build(&request)?;
        debug!(method = %request.method, path = %request.path, "sending request");

        let response = ApiResponse::read(builder.send().await?).await?;
        debug!(
            method = %request.method,
            path = %request.path,
            status = %response.status(),
            "received response"
        );

        if !response.is_success() {
            warn!(
                method = %request.method,
                path = %request.path,
                status = %response.status(),
                "request failed"
            );
        }
        response.error_for_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Params;
    use reqwest::Method;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = HttpTransport::new(&ClientConfig::default(), "not a url").unwrap_err();
        assert!(matches!(err, LykkeError::UrlParse(_)));
    }

    #[test]
    fn test_build_post_attaches_json_body_and_token() {
        let mut transport = HttpTransport::new(&ClientConfig::default(), WALLET_API_URL).unwrap();
        transport.set_bearer_token(Some("abc".to_string()));

        let request = Request::post("/api/Auth").with_params(Params::new().with("email", "a@b.c"));
        let built = transport.build(&request).unwrap().build().unwrap();

        assert_eq!(built.method(), &Method::POST);
        assert_eq!(built.url().as_str(), "https://api.lykkex.com/api/Auth");
        assert_eq!(built.headers().get(AUTHORIZATION).unwrap(), "Bearer abc");
        let body = built.body().and_then(|body| body.as_bytes()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.c"}));
    }

    #[test]
    fn test_invalid_token_is_config_error() {
        let mut transport = HttpTransport::new(&ClientConfig::default(), WALLET_API_URL).unwrap();
        transport.set_bearer_token(Some("bad\ntoken".to_string()));
        let err = transport.build(&Request::get("/home/Version")).unwrap_err();
        assert!(matches!(err, LykkeError::Config(_)));
    }
}
