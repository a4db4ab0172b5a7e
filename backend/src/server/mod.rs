//! Server construction and middleware wiring.

mod config;

pub use config::{AppSettings, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use user_directory::domain::UserService;
use user_directory::inbound::http::state::HttpState;
use user_directory::inbound::http::users;
use user_directory::outbound::persistence::{DbPool, DieselUserRepository};
use user_directory::{ApiDoc, Trace};

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

fn build_http_state(pool: DbPool) -> web::Data<HttpState> {
    let repository = Arc::new(DieselUserRepository::new(pool));
    let service = UserService::new(repository);
    web::Data::new(HttpState::new(Arc::new(service)))
}

/// Assemble the application: trace middleware, users routes and, unless
/// disabled, Swagger UI under `/swagger/`.
pub fn build_app(
    http_state: web::Data<HttpState>,
    docs_enabled: bool,
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
        .app_data(http_state)
        .wrap(Trace)
        .configure(users::configure);

    if docs_enabled {
        app.service(SwaggerUi::new("/swagger/{_:.*}").url(OPENAPI_PATH, ApiDoc::openapi()))
    } else {
        app
    }
}

/// Construct the Actix HTTP server.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        db_pool,
        docs_enabled,
    } = config;
    let http_state = build_http_state(db_pool);

    let server = HttpServer::new(move || build_app(http_state.clone(), docs_enabled))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, docs_enabled, "http server listening");
    Ok(server)
}
