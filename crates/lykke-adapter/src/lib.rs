/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Lykke adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod endpoints;
pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiResponse,
    ClientConfig,
    LykkeError,
    LykkePublicApi,
    LykkeWalletApi,
    ParamValue,
    Params,
    Request,
    Result,
};

// Re-export all types
pub use types::*;
