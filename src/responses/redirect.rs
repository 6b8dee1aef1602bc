use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 301 or 302 with an empty body.
pub fn redirect_response(location: &str, status: u16) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|e| ServerError::Internal(format!("redirect build failed: {e}")))
}
