use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;
use tracing::{error, warn};

/// Convert a ServerError into a JSON error response.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::Content(_) | ServerError::Internal(_) => {
            error!(error = %err, "request failed");
            "Internal Server Error".to_string()
        }
    };
    if status == 400 {
        warn!(%message, "bad request");
    }

    json_error_response(status, &message)
}

pub fn json_error_response(status: u16, message: &str) -> Response {
    let body = json!({ "error": { "status": status, "message": message } }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
