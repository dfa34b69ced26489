/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for public market data payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current bid/ask for an asset pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPairRate {
    pub id: String,
    #[serde(default)]
    pub bid: Option<Decimal>,
    #[serde(default)]
    pub ask: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPair {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub accuracy: u32,
    #[serde(default)]
    pub inverted_accuracy: u32,
    #[serde(default)]
    pub base_asset_id: Option<String>,
    #[serde(default)]
    pub quoting_asset_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_id: Option<String>,
    #[serde(default)]
    pub accuracy: u32,
}

/// Rate history point for an asset pair over the requested period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPairRateHistory {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub bid: Option<Decimal>,
    #[serde(default)]
    pub ask: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookLevel {
    pub volume: Decimal,
    pub price: Decimal,
}

/// One side of the book for an asset pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    pub asset_pair: String,
    pub is_buy: bool,
    pub timestamp: String,
    #[serde(default)]
    pub prices: Vec<OrderBookLevel>,
}

/// 24h trade volume for an asset pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketVolume {
    pub asset_pair: String,
    #[serde(rename = "volume24H", default)]
    pub volume_24h: Option<Decimal>,
    #[serde(default)]
    pub last_price: Option<Decimal>,
    #[serde(default)]
    pub bid: Option<Decimal>,
    #[serde(default)]
    pub ask: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCapitalization {
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub asset_pair: String,
    pub date_time: String,
    pub volume: Decimal,
    pub price: Decimal,
    #[serde(default)]
    pub action: Option<String>,
}
