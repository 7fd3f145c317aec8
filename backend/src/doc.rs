//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API: all collection endpoints, the statistics
//! endpoint, and the health probes. The generated specification is served by
//! Swagger UI in debug builds and exported via `cargo run --bin openapi-dump`
//! for external tooling.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gameshelf backend API",
        description = "HTTP interface for managing a personal video-game collection."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::games::list_games,
        crate::inbound::http::games::export_games,
        crate::inbound::http::games::get_game,
        crate::inbound::http::games::create_game,
        crate::inbound::http::games::update_game,
        crate::inbound::http::games::delete_game,
        crate::inbound::http::games::toggle_favorite,
        crate::inbound::http::stats::get_stats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::Game,
        crate::domain::GameSubmission,
        crate::domain::StatsSummary,
    )),
    tags(
        (name = "games", description = "Operations on the game collection"),
        (name = "stats", description = "Aggregate collection statistics"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
