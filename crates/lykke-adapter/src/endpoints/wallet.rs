/*
[INPUT]:  Wallet endpoint arguments (email, password, partner id)
[OUTPUT]: Request descriptors for the wallet API
[POS]:    Request builder layer - wallet endpoints
[UPDATE]: When adding new wallet endpoints or changing parameters
*/

use crate::http::client::{API_BASE_PATH, HOME_BASE_PATH};
use crate::http::{Params, Request};
use crate::types::AuthRequest;

/// GET /home/Version
pub fn version() -> Request {
    Request::get(format!("{HOME_BASE_PATH}Version"))
}

/// GET /api/AccountExist?email={email}[&partnerId={partnerId}]
pub fn account_exist(email: &str, partner_id: Option<&str>) -> Request {
    let params = Params::new()
        .with("email", email)
        .with_opt("partnerId", partner_id);
    Request::get(format!("{API_BASE_PATH}AccountExist")).with_params(params)
}

/// POST /api/Auth
pub fn auth(request: &AuthRequest) -> Request {
    Request::post(format!("{API_BASE_PATH}Auth")).with_params(request.to_params())
}
