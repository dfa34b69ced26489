/*
[INPUT]:  Public endpoint arguments
[OUTPUT]: Request descriptors for the public market data API
[POS]:    Request builder layer - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing paths
*/

use chrono::{DateTime, Utc};

use crate::http::client::{API_BASE_PATH, HOME_BASE_PATH};
use crate::http::request::path_with_segment;
use crate::http::Request;
use crate::types::{Period, RateHistoryRequest};

/// GET /home/Version
pub fn version() -> Request {
    Request::get(format!("{HOME_BASE_PATH}Version"))
}

/// GET /api/AssetPairs/rate[/{assetPairId}]
pub fn asset_pairs_rates(asset_pair_id: Option<&str>) -> Request {
    let path = format!("{API_BASE_PATH}AssetPairs/rate");
    Request::get(path_with_segment(&path, asset_pair_id))
}

/// GET /api/AssetPairs/dictionary
pub fn asset_pairs_dictionary() -> Request {
    Request::get(format!("{API_BASE_PATH}AssetPairs/dictionary"))
}

/// POST /api/AssetPairs/rate/history
pub fn asset_pairs_rates_history<S: AsRef<str>>(
    asset_pair_ids: &[S],
    period: Period,
    date_time: &DateTime<Utc>,
) -> Request {
    let body = RateHistoryRequest::new(period, date_time).with_asset_pairs(asset_pair_ids);
    Request::post(format!("{API_BASE_PATH}AssetPairs/rate/history")).with_params(body.to_params())
}

/// POST /api/AssetPairs/rate/history/{assetPairId}
pub fn asset_pair_rates_history(
    asset_pair_id: &str,
    period: Period,
    date_time: &DateTime<Utc>,
) -> Request {
    let body = RateHistoryRequest::new(period, date_time);
    let path = format!("{API_BASE_PATH}AssetPairs/rate/history");
    Request::post(path_with_segment(&path, Some(asset_pair_id))).with_params(body.to_params())
}

/// GET /api/Assets/dictionary
pub fn assets_dictionary() -> Request {
    Request::get(format!("{API_BASE_PATH}Assets/dictionary"))
}

/// GET /api/Company/ownershipStructure
pub fn company_ownership_structure() -> Request {
    Request::get(format!("{API_BASE_PATH}Company/ownershipStructure"))
}

/// GET /api/IsAlive
pub fn is_alive() -> Request {
    Request::get(format!("{API_BASE_PATH}IsAlive"))
}

/// GET /api/Market[/{assetPair}]
pub fn market(asset_pair: Option<&str>) -> Request {
    let path = format!("{API_BASE_PATH}Market");
    Request::get(path_with_segment(&path, asset_pair))
}

/// GET /api/Market/capitalization/{asset}
pub fn market_capitalization(asset: &str) -> Request {
    let path = format!("{API_BASE_PATH}Market/capitalization");
    Request::get(path_with_segment(&path, Some(asset)))
}

/// GET /api/OrderBook[/{assetPairId}]
pub fn order_book(asset_pair_id: Option<&str>) -> Request {
    let path = format!("{API_BASE_PATH}OrderBook");
    Request::get(path_with_segment(&path, asset_pair_id))
}

/// GET /api/Trades/{count}
pub fn trades(count: u32) -> Request {
    let path = format!("{API_BASE_PATH}Trades");
    Request::get(path_with_segment(&path, Some(&count.to_string())))
}
