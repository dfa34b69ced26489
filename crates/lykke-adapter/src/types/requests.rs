/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs convertible to parameter mappings
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Period;
use crate::http::Params;

/// Wire format of `dateTime`: RFC 3339, UTC, millisecond precision
pub fn format_date_time(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Body of the rate history endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateHistoryRequest {
    pub period: Period,
    pub date_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_pair_ids: Option<Vec<String>>,
}

impl RateHistoryRequest {
    pub fn new(period: Period, date_time: &DateTime<Utc>) -> Self {
        Self {
            period,
            date_time: format_date_time(date_time),
            asset_pair_ids: None,
        }
    }

    pub fn with_asset_pairs<S: AsRef<str>>(mut self, asset_pair_ids: &[S]) -> Self {
        self.asset_pair_ids = Some(
            asset_pair_ids
                .iter()
                .map(|id| id.as_ref().to_string())
                .collect(),
        );
        self
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("period", self.period.as_str())
            .with("dateTime", self.date_time.as_str())
            .with_opt("assetPairIds", self.asset_pair_ids.clone())
    }
}

/// Body of the wallet authentication endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
}

impl AuthRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            client_info: None,
            partner_id: None,
        }
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("email", self.email.as_str())
            .with("password", self.password.as_str())
            .with_opt("clientInfo", self.client_info.as_deref())
            .with_opt("partnerId", self.partner_id.as_deref())
    }
}
