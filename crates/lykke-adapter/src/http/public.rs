/*
[INPUT]:  Asset pair / asset identifiers, periods and counts
[OUTPUT]: Raw market data responses (rates, dictionaries, order books, trades)
[POS]:    HTTP layer - public market data client (no auth required)
[UPDATE]: When adding new public endpoints or changing response handling
*/

use chrono::{DateTime, Utc};
use reqwest::Url;

use crate::endpoints::public as endpoints;
use crate::http::client::{HttpTransport, PUBLIC_API_URL};
use crate::http::{ApiResponse, ClientConfig, Request, Result};
use crate::types::Period;

/// Client for the public Lykke market data API
#[derive(Debug, Clone)]
pub struct LykkePublicApi {
    transport: HttpTransport,
}

impl LykkePublicApi {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, PUBLIC_API_URL)
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

    /// Get rates for all asset pairs, or for one when an id is given
    ///
    /// GET /api/AssetPairs/rate[/{assetPairId}]
    pub async fn asset_pairs_rates(&self, asset_pair_id: Option<&str>) -> Result<ApiResponse> {
        self.execute(endpoints::asset_pairs_rates(asset_pair_id)).await
    }

    /// GET /api/AssetPairs/dictionary
    pub async fn asset_pairs_dictionary(&self) -> Result<ApiResponse> {
        self.execute(endpoints::asset_pairs_dictionary()).await
    }

    /// Get rates for several asset pairs for a specified period
    ///
    /// POST /api/AssetPairs/rate/history
    pub async fn asset_pairs_rates_history<S: AsRef<str>>(
        &self,
        asset_pair_ids: &[S],
        period: Period,
        date_time: &DateTime<Utc>,
    ) -> Result<ApiResponse> {
        self.execute(endpoints::asset_pairs_rates_history(
            asset_pair_ids,
            period,
            date_time,
        ))
        .await
    }

    /// Get rates for one asset pair for a specified period
    ///
    /// POST /api/AssetPairs/rate/history/{assetPairId}
    pub async fn asset_pair_rates_history(
        &self,
        asset_pair_id: &str,
        period: Period,
        date_time: &DateTime<Utc>,
    ) -> Result<ApiResponse> {
        self.execute(endpoints::asset_pair_rates_history(
            asset_pair_id,
            period,
            date_time,
        ))
        .await
    }

    /// GET /api/Assets/dictionary
    pub async fn assets_dictionary(&self) -> Result<ApiResponse> {
        self.execute(endpoints::assets_dictionary()).await
    }

    /// GET /api/Company/ownershipStructure
    pub async fn company_ownership_structure(&self) -> Result<ApiResponse> {
        self.execute(endpoints::company_ownership_structure()).await
    }

    /// GET /api/IsAlive
    pub async fn is_alive(&self) -> Result<ApiResponse> {
        self.execute(endpoints::is_alive()).await
    }

    /// Trade volumes for all asset pairs, or for one when given
    ///
    /// GET /api/Market[/{assetPair}]
    pub async fn market(&self, asset_pair: Option<&str>) -> Result<ApiResponse> {
        self.execute(endpoints::market(asset_pair)).await
    }

    /// GET /api/Market/capitalization/{asset}
    pub async fn market_capitalization(&self, asset: &str) -> Result<ApiResponse> {
        self.execute(endpoints::market_capitalization(asset)).await
    }

    /// All order books, or the books of one asset pair when given
    ///
    /// GET /api/OrderBook[/{assetPairId}]
    pub async fn order_book(&self, asset_pair_id: Option<&str>) -> Result<ApiResponse> {
        self.execute(endpoints::order_book(asset_pair_id)).await
    }

    /// Last `count` trades
    ///
    /// GET /api/Trades/{count}
    pub async fn trades(&self, count: u32) -> Result<ApiResponse> {
        self.execute(endpoints::trades(count)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, LykkeError};
    use crate::types::{
        Asset, AssetPair, AssetPairRate, IsAliveResponse, MarketCapitalization, MarketVolume,
        OrderBook, OrderBookLevel, Period, Trade,
    };
    use chrono::TimeZone;
    use reqwest::StatusCode;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::LykkePublicApi;

    fn client(server: &MockServer) -> LykkePublicApi {
        LykkePublicApi::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    async fn mount_json(server: &MockServer, endpoint: &str, body: &'static str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_asset_pairs_dictionary() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/AssetPairs/dictionary",
            r#"[
                {
                    "id": "LKKEUR",
                    "name": "LKK/EUR",
                    "accuracy": 5,
                    "invertedAccuracy": 2,
                    "baseAssetId": "LKK",
                    "quotingAssetId": "EUR"
                },
                {"id": "BTCUSD", "name": "BTC/USD", "accuracy": 3}
            ]"#,
        )
        .await;

        let response = client(&server)
            .asset_pairs_dictionary()
            .await
            .expect("asset_pairs_dictionary failed");

        let pairs: Vec<AssetPair> = response.json().expect("decode pairs");
        assert_eq!(
            pairs[0],
            AssetPair {
                id: "LKKEUR".to_string(),
                name: "LKK/EUR".to_string(),
                accuracy: 5,
                inverted_accuracy: 2,
                base_asset_id: Some("LKK".to_string()),
                quoting_asset_id: Some("EUR".to_string()),
            }
        );
        assert_eq!(pairs[1].inverted_accuracy, 0);
        assert!(pairs[1].base_asset_id.is_none());
    }

    #[tokio::test]
    async fn test_assets_dictionary() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/Assets/dictionary",
            r#"[{"id": "LKK", "name": "Lykke Coin", "displayId": "LKK", "accuracy": 2}]"#,
        )
        .await;

        let response = client(&server)
            .assets_dictionary()
            .await
            .expect("assets_dictionary failed");

        let assets: Vec<Asset> = response.json().expect("decode assets");
        assert_eq!(
            assets,
            vec![Asset {
                id: "LKK".to_string(),
                name: "Lykke Coin".to_string(),
                display_id: Some("LKK".to_string()),
                accuracy: 2,
            }]
        );
    }

    #[tokio::test]
    async fn test_market_capitalization() {
        let server = MockServer::start().await;
        mount_json(&server, "/api/Market/capitalization/LKK", r#"{"amount": 51234567.89}"#).await;

        let response = client(&server)
            .market_capitalization("LKK")
            .await
            .expect("market_capitalization failed");

        let capitalization: MarketCapitalization = response.json().expect("decode capitalization");
        assert_eq!(capitalization.amount, "51234567.89".parse().expect("amount"));
    }

    #[tokio::test]
    async fn test_trades() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/Trades/2",
            r#"[
                {
                    "id": "t-1",
                    "assetPair": "LKKEUR",
                    "dateTime": "2017-11-11T13:43:35.723Z",
                    "volume": 250,
                    "price": 0.032,
                    "action": "Buy"
                },
                {
                    "id": "t-2",
                    "assetPair": "LKKEUR",
                    "dateTime": "2017-11-11T13:44:00.000Z",
                    "volume": 10.5,
                    "price": 0.031
                }
            ]"#,
        )
        .await;

        let response = client(&server).trades(2).await.expect("trades failed");

        let trades: Vec<Trade> = response.json().expect("decode trades");
        assert_eq!(
            trades[0],
            Trade {
                id: "t-1".to_string(),
                asset_pair: "LKKEUR".to_string(),
                date_time: "2017-11-11T13:43:35.723Z".to_string(),
                volume: "250".parse().expect("volume"),
                price: "0.032".parse().expect("price"),
                action: Some("Buy".to_string()),
            }
        );
        assert!(trades[1].action.is_none());
    }

    #[tokio::test]
    async fn test_is_alive() {
        let server = MockServer::start().await;
        mount_json(&server, "/api/IsAlive", r#"{"version": "1.0.2", "env": "PROD"}"#).await;

        let response = client(&server).is_alive().await.expect("is_alive failed");

        let alive: IsAliveResponse = response.json().expect("decode is-alive");
        assert_eq!(alive.version, "1.0.2");
        assert_eq!(alive.env.as_deref(), Some("PROD"));
    }

    #[tokio::test]
    async fn test_asset_pairs_rates_single() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/AssetPairs/rate/LKKEUR"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"id":"LKKEUR","bid":0.0312,"ask":0.0335}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .asset_pairs_rates(Some("LKKEUR"))
            .await
            .expect("asset_pairs_rates failed");

        assert_eq!(response.status(), StatusCode::OK);
        let rate: AssetPairRate = response.json().expect("decode rate");
        assert_eq!(
            rate,
            AssetPairRate {
                id: "LKKEUR".to_string(),
                bid: Some("0.0312".parse().expect("bid")),
                ask: Some("0.0335".parse().expect("ask")),
            }
        );
    }

    #[tokio::test]
    async fn test_order_book_all() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {
                "assetPair": "LKKEUR",
                "isBuy": true,
                "timestamp": "2017-11-11T13:43:35.723Z",
                "prices": [{"volume": 100.5, "price": 0.031}]
            }
        ]"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/OrderBook"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .order_book(None)
            .await
            .expect("order_book failed");

        let books: Vec<OrderBook> = response.json().expect("decode books");
        assert_eq!(
            books,
            vec![OrderBook {
                asset_pair: "LKKEUR".to_string(),
                is_buy: true,
                timestamp: "2017-11-11T13:43:35.723Z".to_string(),
                prices: vec![OrderBookLevel {
                    volume: "100.5".parse().expect("volume"),
                    price: "0.031".parse().expect("price"),
                }],
            }]
        );
    }

    #[tokio::test]
    async fn test_market_single_pair() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/Market/LKKEUR"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"assetPair":"LKKEUR","volume24H":1200,"lastPrice":0.032,"bid":0.031,"ask":0.033}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .market(Some("LKKEUR"))
            .await
            .expect("market failed");

        let volume: MarketVolume = response.json().expect("decode volume");
        assert_eq!(volume.asset_pair, "LKKEUR");
        assert_eq!(volume.volume_24h, Some("1200".parse().expect("volume")));
    }

    #[tokio::test]
    async fn test_rates_history_posts_json_body() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/api/AssetPairs/rate/history"))
            .and(body_json(serde_json::json!({
                "period": "Day",
                "dateTime": "2017-11-11T13:43:35.000Z",
                "assetPairIds": ["LKK1YEUR", "LKKEUR"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let date_time = chrono::Utc
            .with_ymd_and_hms(2017, 11, 11, 13, 43, 35)
            .unwrap();
        let response = client(&server)
            .asset_pairs_rates_history(&["LKK1YEUR", "LKKEUR"], Period::Day, &date_time)
            .await
            .expect("asset_pairs_rates_history failed");

        assert_eq!(response.text(), "[]");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error_with_body() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/Market/capitalization/NOPE"))
            .respond_with(ResponseTemplate::new(404).set_body_string("asset not found"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .market_capitalization("NOPE")
            .await
            .expect_err("expected 404 error");

        match err {
            LykkeError::Status { status, body, .. } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body.as_ref(), b"asset not found");
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }
}
