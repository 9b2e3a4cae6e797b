use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Attachment, payload::Json};

use business::domain::shopping_list::use_cases::download::{
    DownloadShoppingListParams, DownloadShoppingListUseCase,
};
use business::domain::user::repository::AuthTokenRepository;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{TokenAuth, authenticate};
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    download_use_case: Arc<dyn DownloadShoppingListUseCase>,
    auth_tokens: Arc<dyn AuthTokenRepository>,
}

impl ShoppingListApi {
    pub fn new(
        download_use_case: Arc<dyn DownloadShoppingListUseCase>,
        auth_tokens: Arc<dyn AuthTokenRepository>,
    ) -> Self {
        Self {
            download_use_case,
            auth_tokens,
        }
    }
}

/// Shopping list API
#[OpenApi]
impl ShoppingListApi {
    /// Download the shopping list
    ///
    /// Sums the ingredients of every recipe in the caller's cart and returns
    /// them as a PDF attachment. An empty cart is rejected with 400.
    #[oai(
        path = "/api/recipes/download_shopping_cart",
        method = "get",
        tag = "ApiTags::ShoppingList"
    )]
    async fn download(&self, auth: TokenAuth) -> DownloadShoppingListResponse {
        let user_id = match authenticate(self.auth_tokens.as_ref(), &auth).await {
            Ok(user_id) => user_id,
            Err(err) => {
                let (status, json) = err.into_error_response();
                return match status.as_u16() {
                    401 => DownloadShoppingListResponse::Unauthorized(json),
                    _ => DownloadShoppingListResponse::InternalError(json),
                };
            }
        };
        let params = DownloadShoppingListParams { user_id };

        match self.download_use_case.execute(params).await {
            Ok(file) => DownloadShoppingListResponse::Ok(
                Attachment::new(file.content).filename(file.filename),
            ),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DownloadShoppingListResponse::BadRequest(json),
                    _ => DownloadShoppingListResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DownloadShoppingListResponse {
    #[oai(status = 200, content_type = "application/pdf")]
    Ok(Attachment<Vec<u8>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
