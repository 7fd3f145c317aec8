//! Server construction and middleware wiring.

mod config;

pub use config::{AppSettings, ServerConfig};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::GameService;
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::games::{
    create_game, delete_game, export_games, get_game, list_games, toggle_favorite, update_game,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::stats::get_stats;
use crate::middleware::RequestLog;

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
    // `/games/export` is registered ahead of `/games/{id}` so the literal
    // segment wins route matching.
    let api = web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(list_games)
        .service(export_games)
        .service(create_game)
        .service(get_game)
        .service(update_game)
        .service(delete_game)
        .service(toggle_favorite)
        .service(get_stats);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(RequestLog)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(GameService::new(config.repository.clone())));
    let bind_addr = config.bind_addr;
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
