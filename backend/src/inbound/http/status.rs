//! Root status endpoint reporting that the service is up.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

const STATUS_MESSAGE: &str = "CRUD API is running";

/// Response payload for the root status probe.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is running", body = StatusResponse)),
    tags = ["status"],
    operation_id = "serviceStatus"
)]
#[get("/")]
pub async fn service_status() -> web::Json<StatusResponse> {
    web::Json(StatusResponse {
        message: STATUS_MESSAGE.to_owned(),
    })
}
