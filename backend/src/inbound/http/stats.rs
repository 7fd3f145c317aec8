//! Aggregate statistics endpoint.

use actix_web::{get, web};

use crate::domain::StatsSummary;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Summarise the whole collection, recomputed from a live scan per request.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Collection summary", body = StatsSummary),
        (status = 500, description = "Internal server error")
    ),
    tags = ["stats"],
    operation_id = "getStats"
)]
#[get("/stats")]
pub async fn get_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<StatsSummary>> {
    Ok(web::Json(state.games.stats().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameService;
    use crate::inbound::http::state::HttpState;
    use crate::outbound::persistence::InMemoryGameRepository;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = web::Data::new(HttpState::new(GameService::new(Arc::new(
            InMemoryGameRepository::new(),
        ))));
        App::new().app_data(state).service(
            web::scope("/api")
                .service(crate::inbound::http::games::create_game)
                .service(get_stats),
        )
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_collection_yields_the_zeroed_summary() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/stats").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({
                "totalGames": 0,
                "totalPlayTime": 0.0,
                "averageMetacritic": 0.0,
                "completedGames": 0,
                "topGenre": "N/A",
            })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn summary_reflects_the_seeded_collection() {
        let app = actix_test::init_service(test_app()).await;
        for body in [
            json!({
                "title": "A",
                "genres": ["RPG", "Action"],
                "platforms": ["PC"],
                "playHours": 10.0,
                "metacriticScore": 90,
                "completed": true,
            }),
            json!({
                "title": "B",
                "genres": ["RPG"],
                "platforms": ["PC"],
                "playHours": 5.5,
                "metacriticScore": 85,
            }),
            json!({
                "title": "C",
                "genres": ["Action"],
                "platforms": ["Switch"],
            }),
        ] {
            let request = actix_test::TestRequest::post()
                .uri("/api/games")
                .set_json(&body)
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/stats").to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("totalGames").and_then(Value::as_u64), Some(3));
        assert_eq!(
            body.get("totalPlayTime").and_then(Value::as_f64),
            Some(15.5)
        );
        assert_eq!(
            body.get("averageMetacritic").and_then(Value::as_f64),
            Some(87.5)
        );
        assert_eq!(body.get("completedGames").and_then(Value::as_u64), Some(1));
        assert_eq!(body.get("topGenre").and_then(Value::as_str), Some("RPG"));
    }
}
