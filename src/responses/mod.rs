pub mod errors;
pub mod json;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;
pub use json::json_response;
pub use redirect::redirect_response;
