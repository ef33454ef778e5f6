//! Item CRUD HTTP handlers.
//!
//! ```text
//! POST   /items
//! GET    /items
//! GET    /items/{id}
//! PUT    /items/{id}
//! DELETE /items/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::ItemRepositoryError;
use crate::domain::{DomainError, Item, ItemDraft, ItemName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    NAME_FIELD, item_name_error, missing_field_error, parse_item_id,
};

/// Confirmation detail returned after a successful delete.
const DELETED_DETAIL: &str = "Item deleted successfully";

/// Request payload for creating or replacing an item.
///
/// Both fields deserialize leniently so validation can report precise
/// field-level failures instead of a serde error string.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Response payload for a stored item.
///
/// `description` is always present, serialising as `null` when unset.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(value: Item) -> Self {
        Self {
            id: value.id().value(),
            name: value.name().as_ref().to_owned(),
            description: value.description().map(ToOwned::to_owned),
        }
    }
}

/// Confirmation payload for a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub detail: String,
}

impl DeletedResponse {
    fn new() -> Self {
        Self {
            detail: DELETED_DETAIL.to_owned(),
        }
    }
}

fn parse_item_payload(payload: ItemPayload) -> Result<ItemDraft, DomainError> {
    let ItemPayload { name, description } = payload;
    let name = name.ok_or_else(|| missing_field_error(NAME_FIELD))?;
    let name = ItemName::new(name).map_err(|err| item_name_error(&err))?;
    Ok(ItemDraft::new(name, description))
}

/// Map persistence failures onto transport-facing domain errors.
///
/// Connection problems are transient, so clients get a 503 with a fixed
/// message while the specifics go to the log. Query failures surface as
/// internal errors and are redacted at the response boundary.
fn map_repository_error(error: ItemRepositoryError) -> DomainError {
    match error {
        ItemRepositoryError::Connection { message } => {
            error!(reason = %message, "item store connection failure");
            DomainError::service_unavailable("item store is unavailable")
        }
        ItemRepositoryError::Query { message } => {
            error!(reason = %message, "item store query failure");
            DomainError::internal(message)
        }
    }
}

fn item_not_found() -> DomainError {
    DomainError::not_found("Item not found")
}

/// Create a new item.
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 422, description = "Validation failed", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope),
        (status = 503, description = "Item store unavailable", body = ErrorEnvelope)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<ItemPayload>,
) -> ApiResult<HttpResponse> {
    let draft = parse_item_payload(payload.into_inner())?;
    let item = state
        .items
        .insert(&draft)
        .await
        .map_err(map_repository_error)?;
    Ok(HttpResponse::Created().json(ItemResponse::from(item)))
}

/// List every stored item.
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All stored items", body = [ItemResponse]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope),
        (status = 503, description = "Item store unavailable", body = ErrorEnvelope)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ItemResponse>>> {
    let items = state
        .items
        .list_all()
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Fetch a single item by identifier.
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "The requested item", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorEnvelope),
        (status = 422, description = "Validation failed", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope),
        (status = 503, description = "Item store unavailable", body = ErrorEnvelope)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = parse_item_id(&path.into_inner())?;
    let item = state
        .items
        .get_by_id(id)
        .await
        .map_err(map_repository_error)?
        .ok_or_else(item_not_found)?;
    Ok(web::Json(ItemResponse::from(item)))
}

/// Replace an existing item.
///
/// The stored record is overwritten with the payload, so omitting the
/// description clears it. There is no partial update.
#[utoipa::path(
    put,
    path = "/items/{id}",
    request_body = ItemPayload,
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "The replaced item", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorEnvelope),
        (status = 422, description = "Validation failed", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope),
        (status = 503, description = "Item store unavailable", body = ErrorEnvelope)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ItemPayload>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = parse_item_id(&path.into_inner())?;
    let draft = parse_item_payload(payload.into_inner())?;
    let item = state
        .items
        .update(id, &draft)
        .await
        .map_err(map_repository_error)?
        .ok_or_else(item_not_found)?;
    Ok(web::Json(ItemResponse::from(item)))
}

/// Delete an item by identifier.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item deleted", body = DeletedResponse),
        (status = 404, description = "Item not found", body = ErrorEnvelope),
        (status = 422, description = "Validation failed", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope),
        (status = 503, description = "Item store unavailable", body = ErrorEnvelope)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let id = parse_item_id(&path.into_inner())?;
    let deleted = state
        .items
        .delete_by_id(id)
        .await
        .map_err(map_repository_error)?;

    if deleted {
        Ok(web::Json(DeletedResponse::new()))
    } else {
        Err(item_not_found())
    }
}
