//! OpenAPI document assembly.
//!
//! [`ApiDoc`] collects every inbound HTTP endpoint (status, items, health
//! probes) together with the payload schemas they exchange into one OpenAPI
//! document. Debug builds serve it through Swagger UI at `/docs`;
//! `cargo run --bin openapi-dump` writes it to stdout for tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::items::{DeletedResponse, ItemPayload, ItemResponse};
use crate::inbound::http::status::StatusResponse;

/// The service's OpenAPI document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item service API",
        description = "HTTP interface for item CRUD and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::status::service_status,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ItemPayload,
        ItemResponse,
        DeletedResponse,
        StatusResponse,
        ErrorEnvelope
    )),
    tags(
        (name = "items", description = "Item CRUD operations"),
        (name = "status", description = "Service status reporting"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn item_response_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("ItemResponse").expect("ItemResponse schema");

        assert_object_schema_has_field(schema, "id");
        assert_object_schema_has_field(schema, "name");
        assert_object_schema_has_field(schema, "description");
    }

    #[test]
    fn item_payload_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("ItemPayload").expect("ItemPayload schema");

        assert_object_schema_has_field(schema, "name");
        assert_object_schema_has_field(schema, "description");
    }

    #[test]
    fn document_registers_all_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in ["/", "/items", "/items/{id}", "/health/ready", "/health/live"] {
            assert!(paths.contains_key(path), "missing path '{path}'");
        }
    }
}
