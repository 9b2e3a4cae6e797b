use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::short_link::errors::ShortLinkError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShortLinkError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShortLinkError::InvalidToken => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "short_link.invalid_token",
            ),
            ShortLinkError::RecipeNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "short_link.recipe_not_found",
            ),
            ShortLinkError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
