use poem::http::StatusCode;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;
use poem_openapi::payload::Json;

use business::domain::shared::value_objects::UserId;
use business::domain::user::repository::AuthTokenRepository;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

const TOKEN_KEYWORD: &str = "Token";

/// Token authentication using keys issued by the account service.
///
/// Clients send `Authorization: Token <key>`. A missing header is rejected by
/// poem-openapi before the handler runs; the key itself is resolved with
/// [`authenticate`] so a failing token store surfaces as a server error.
#[derive(SecurityScheme)]
#[oai(ty = "api_key", key_name = "Authorization", key_in = "header")]
pub struct TokenAuth(ApiKey);

#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    InvalidToken,
    Unavailable,
}

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            AuthError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", "auth.invalid_token")
            }
            AuthError::Unavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "auth.unavailable",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

/// Resolves the caller of a request to the user owning its token.
pub async fn authenticate(
    tokens: &dyn AuthTokenRepository,
    auth: &TokenAuth,
) -> Result<UserId, AuthError> {
    let Some(key) = extract_token_key(&auth.0.key) else {
        tracing::warn!("auth.malformed_authorization_header");
        return Err(AuthError::InvalidToken);
    };

    match tokens.find_user_by_token(key).await {
        Ok(Some(user_id)) => Ok(user_id),
        Ok(None) => {
            tracing::warn!("auth.unknown_token");
            Err(AuthError::InvalidToken)
        }
        Err(e) => {
            tracing::error!("auth.token_lookup_failed: {e}");
            Err(AuthError::Unavailable)
        }
    }
}

/// Returns the key from a `Token <key>` header value.
fn extract_token_key(header_value: &str) -> Option<&str> {
    let (keyword, key) = header_value.trim().split_once(' ')?;
    let key = key.trim();
    if keyword != TOKEN_KEYWORD || key.is_empty() || key.contains(' ') {
        return None;
    }
    Some(key)
}
