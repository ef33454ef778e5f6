//! Request validation for the HTTP adapter.
//!
//! Validation failures all render as a 422 whose `detail` is an array of
//! field violations, so every helper here produces details in that shape.

use serde_json::json;

use crate::domain::{DomainError, ItemId, ItemValidationError};

/// Wire-level field name referenced by a violation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Name field of the item payload.
pub(crate) const NAME_FIELD: FieldName = FieldName::new("name");
/// Identifier segment of item paths.
pub(crate) const ID_FIELD: FieldName = FieldName::new("id");

/// One field violation on its way to becoming a 422 response.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn into_error(self) -> DomainError {
        let Self { field, message } = self;
        let details = json!([{
            "field": field,
            "message": message.clone(),
        }]);
        DomainError::invalid_request(message).with_details(details)
    }

    fn with_value(self, value: impl Into<String>) -> DomainError {
        let Self { field, message } = self;
        let details = json!([{
            "field": field,
            "message": message.clone(),
            "value": value.into(),
        }]);
        DomainError::invalid_request(message).with_details(details)
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> DomainError {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}")).into_error()
}

pub(crate) fn item_name_error(error: &ItemValidationError) -> DomainError {
    ValidationError::new(NAME_FIELD.as_str(), error.to_string()).into_error()
}

pub(crate) fn invalid_id_error(value: &str) -> DomainError {
    ValidationError::new(ID_FIELD.as_str(), "id must be an integer").with_value(value)
}

/// Parse a path segment into an [`ItemId`].
///
/// Unparseable segments are a validation failure rather than a missing
/// resource; only well-formed identifiers reach the store.
pub(crate) fn parse_item_id(raw: &str) -> Result<ItemId, DomainError> {
    raw.parse::<i64>()
        .map(ItemId::new)
        .map_err(|_| invalid_id_error(raw))
}
