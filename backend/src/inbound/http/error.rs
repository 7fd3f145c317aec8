//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the wire envelopes: `{"error": ...}`
//! for single failures and `{"errors": [...]}` for validation, which carries
//! every violation together.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::DomainError;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, DomainError>;

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Repository(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Self::Validation(violations) => builder.json(json!({
                "errors": violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            })),
            Self::MalformedId(_) => builder.json(json!({ "error": "Invalid game id." })),
            Self::NotFound => builder.json(json!({ "error": "Game not found." })),
            Self::Repository(source) => {
                // Detail stays in the server log; clients get the generic envelope.
                error!(error = %source, "repository failure while handling request");
                builder.json(json!({ "error": "Internal server error." }))
            }
            Self::Internal { message } => {
                error!(error = %message, "internal failure while handling request");
                builder.json(json!({ "error": "Internal server error." }))
            }
        }
    }
}

/// Map body deserialisation failures onto the `{"error": ...}` envelope.
///
/// Registered on the JSON extractor so malformed bodies and type-shape
/// mismatches never surface as bare text responses.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(json!({ "error": format!("Invalid request body: {err}") }));
    actix_web::error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game::MalformedGameId;
    use crate::domain::ports::GameRepositoryError;
    use crate::domain::validation::Violation;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    async fn body_of(err: &DomainError) -> Value {
        let bytes = to_bytes(err.error_response().into_body())
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[rstest]
    #[actix_web::test]
    async fn validation_maps_to_400_with_every_violation() {
        let err = DomainError::Validation(vec![
            Violation::MissingTitle,
            Violation::MissingGenres,
            Violation::MissingPlatforms,
        ]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = body_of(&err).await;
        let errors = body
            .get("errors")
            .and_then(Value::as_array)
            .expect("errors array");
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors[0].as_str(),
            Some("Title is required and must be a non-empty string.")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn not_found_maps_to_404_envelope() {
        let err = DomainError::NotFound;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let body = body_of(&err).await;
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some("Game not found.")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_id_maps_to_400_envelope() {
        let err = DomainError::MalformedId(MalformedGameId {
            value: "nope".to_owned(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = body_of(&err).await;
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some("Invalid game id.")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn repository_failure_is_redacted_to_a_generic_500() {
        let err = DomainError::Repository(GameRepositoryError::query("secret detail"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(&err).await;
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some("Internal server error.")
        );
        assert!(!body.to_string().contains("secret detail"));
    }
}
