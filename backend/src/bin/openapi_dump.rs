//! Write the service's OpenAPI document to stdout as pretty-printed JSON.

use backend::doc::ApiDoc;
use utoipa::OpenApi;

fn main() {
    println!(
        "{}",
        ApiDoc::openapi()
            .to_pretty_json()
            .expect("serialise OpenAPI document")
    );
}
