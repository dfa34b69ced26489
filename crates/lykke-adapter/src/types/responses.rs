/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs for wallet and service endpoints
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Result/Error wrapper used by the wallet API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(rename = "Result")]
    pub result: Option<T>,
    #[serde(rename = "Error", default)]
    pub error: Option<ApiErrorPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(rename = "Code", default)]
    pub code: Option<i32>,
    #[serde(rename = "Field", default)]
    pub field: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountExistResult {
    #[serde(rename = "IsEmailRegistered")]
    pub is_email_registered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResult {
    #[serde(rename = "KycStatus", default)]
    pub kyc_status: Option<String>,
    #[serde(rename = "PinIsEntered", default)]
    pub pin_is_entered: bool,
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "NotificationsId", default)]
    pub notifications_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionResponse {
    #[serde(alias = "Version")]
    pub version: String,
}

/// Service health payload; both camelCase and PascalCase spellings are accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsAliveResponse {
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(alias = "Version")]
    pub version: String,
    #[serde(default, alias = "Env")]
    pub env: Option<String>,
    #[serde(default, rename = "isDebug", alias = "IsDebug")]
    pub is_debug: Option<bool>,
}
