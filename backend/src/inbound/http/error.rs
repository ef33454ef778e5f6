//! Domain errors rendered as HTTP responses.
//!
//! The [`ResponseError`] impl here is the only place status codes and error
//! bodies are decided, so handlers can return a bare `DomainError` with `?`.
//! Every error body is an [`ErrorEnvelope`] and clients can always read a
//! `detail` member.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{DomainError, ErrorCode};

/// Result alias used by every handler.
pub type ApiResult<T> = Result<T, DomainError>;

/// Detail shown for internal failures instead of the underlying message.
const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Wire envelope for every error response.
///
/// `detail` carries a plain message for most failures and an array of
/// field violations for validation errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    #[schema(value_type = Object)]
    pub detail: Value,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render the wire body for a domain error.
///
/// Internal messages never leave the process; they are logged where the
/// error is raised and replaced with a fixed detail here.
fn envelope_for(error: &DomainError) -> ErrorEnvelope {
    let detail = match error.code() {
        ErrorCode::InvalidRequest => error
            .details()
            .cloned()
            .unwrap_or_else(|| Value::String(error.message().to_owned())),
        ErrorCode::NotFound | ErrorCode::ServiceUnavailable => {
            Value::String(error.message().to_owned())
        }
        ErrorCode::InternalError => Value::String(INTERNAL_ERROR_DETAIL.to_owned()),
    };

    ErrorEnvelope { detail }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(envelope_for(self))
    }
}

/// JSON extractor configuration for the item endpoints.
///
/// Bodies that cannot be decoded as JSON never reach a handler, so this
/// hook is where they become validation failures instead of the default
/// 400 response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        DomainError::invalid_request(format!("invalid request body: {err}")).into()
    })
}
