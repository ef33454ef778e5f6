//! HTTP server assembly: route registration, middleware, and startup.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::RequestSpan;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::error::json_config;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::items::{create_item, delete_item, get_item, list_items, update_item};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::status::service_status;
use backend::outbound::persistence::DieselItemRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(RequestSpan)
        .service(service_status)
        .service(create_item)
        .service(list_items)
        .service(get_item)
        .service(update_item)
        .service(delete_item)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Build and start the HTTP listener for the item service.
///
/// Each worker gets an app wired to a [`DieselItemRepository`] over the
/// configured pool. Once the socket is bound, `health_state` flips to ready
/// so the readiness probe starts answering 200. Await the returned [`Server`]
/// to drive the listener.
///
/// # Errors
/// Returns [`std::io::Error`] when the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let worker_health_state = health_state.clone();
    let ServerConfig { bind_addr, pool } = config;
    let http_state = web::Data::new(HttpState::new(Arc::new(DieselItemRepository::new(pool))));

    let server = HttpServer::new(move || {
        build_app(worker_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
