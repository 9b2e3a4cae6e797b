use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShoppingListError::EmptyCart => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_list.empty_cart",
            ),
            ShoppingListError::RenderFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "shopping_list.render_failed",
            ),
            ShoppingListError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_empty_cart_to_bad_request() {
        let (status, body) = ShoppingListError::EmptyCart.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.message, "shopping_list.empty_cart");
    }

    #[test]
    fn should_map_render_failure_to_internal_error() {
        let (status, _) = ShoppingListError::RenderFailed.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
