//! Transport-agnostic error type shared by the domain and its adapters.
//!
//! Operations report failures as a [`DomainError`]: a category code, a
//! human-readable message, and optional structured details. The HTTP adapter
//! decides status codes and envelope shape; nothing in here knows about
//! transports.

use serde_json::Value;

/// Category of a domain failure, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The caller sent something malformed or invalid.
    InvalidRequest,
    /// No resource exists for the given identifier.
    NotFound,
    /// A dependency the operation needs is temporarily unreachable.
    ServiceUnavailable,
    /// The operation failed for reasons the caller cannot fix.
    InternalError,
}

/// Error value carried from domain operations out to the adapters.
///
/// The message is always non-blank; constructors enforce this so adapters can
/// render it without a fallback. Details, when present, hold adapter-defined
/// structure such as a list of field violations.
///
/// # Examples
/// ```
/// use backend::domain::{DomainError, ErrorCode};
///
/// let err = DomainError::not_found("Item not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "Item not found");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DomainError {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
}

impl DomainError {
    /// Create an error with the given code and message.
    ///
    /// # Panics
    ///
    /// Panics when `message` is blank after trimming. Call sites construct
    /// messages from literals or formatted context, so a blank message is a
    /// programming error rather than a runtime condition.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(
            !message.trim().is_empty(),
            "domain error message must not be blank"
        );
        Self {
            code,
            message,
            details: None,
        }
    }

    /// An `InvalidRequest` error with the given message.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// A `NotFound` error with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// A `ServiceUnavailable` error with the given message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// An `InternalError` error with the given message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Attach structured details, replacing any previous ones.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::DomainError;
    /// use serde_json::json;
    ///
    /// let err = DomainError::invalid_request("validation failed")
    ///     .with_details(json!([{ "field": "name" }]));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// The failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Structured details, if any were attached.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DomainError {}
