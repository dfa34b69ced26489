/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses passed through from the Lykke API
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod request;
pub mod response;
pub mod wallet;

pub use error::{LykkeError, Result};
pub use request::{ParamValue, Params, Request};
pub use response::ApiResponse;

pub use client::{
    API_BASE_PATH, ClientConfig, HOME_BASE_PATH, PUBLIC_API_URL, WALLET_API_URL,
};
pub use public::LykkePublicApi;
pub use wallet::LykkeWalletApi;
