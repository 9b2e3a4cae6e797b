use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::RecipeId;
use business::domain::short_link::use_cases::get_link::{GetShortLinkParams, GetShortLinkUseCase};
use business::domain::short_link::use_cases::resolve::{
    ResolveShortLinkParams, ResolveShortLinkUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::short_link::dto::ShortLinkResponse;
use crate::api::tags::ApiTags;
use crate::config::short_link_config::ShortLinkConfig;

pub struct ShortLinkApi {
    resolve_use_case: Arc<dyn ResolveShortLinkUseCase>,
    get_link_use_case: Arc<dyn GetShortLinkUseCase>,
    config: ShortLinkConfig,
}

impl ShortLinkApi {
    pub fn new(
        resolve_use_case: Arc<dyn ResolveShortLinkUseCase>,
        get_link_use_case: Arc<dyn GetShortLinkUseCase>,
        config: ShortLinkConfig,
    ) -> Self {
        Self {
            resolve_use_case,
            get_link_use_case,
            config,
        }
    }
}

/// Recipe short links
///
/// Issues compact links for recipes and redirects them to the recipe page.
#[OpenApi]
impl ShortLinkApi {
    /// Follow a short link
    ///
    /// Redirects to the recipe page. Unknown or malformed tokens return 404.
    #[oai(path = "/s/:token", method = "get", tag = "ApiTags::ShortLinks")]
    async fn resolve(&self, token: Path<String>) -> ResolveShortLinkResponse {
        let params = ResolveShortLinkParams { token: token.0 };

        match self.resolve_use_case.execute(params).await {
            Ok(target) => ResolveShortLinkResponse::Found(target.location),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ResolveShortLinkResponse::NotFound(json),
                    _ => ResolveShortLinkResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a recipe short link
    ///
    /// Returns the absolute short link for an existing recipe.
    #[oai(
        path = "/api/recipes/:id/get-link",
        method = "get",
        tag = "ApiTags::ShortLinks"
    )]
    async fn get_link(&self, id: Path<i64>) -> GetShortLinkResponse {
        if id.0 <= 0 {
            return GetShortLinkResponse::NotFound(Json(ErrorResponse::new(
                "NotFound",
                "short_link.recipe_not_found",
            )));
        }

        let params = GetShortLinkParams {
            recipe_id: RecipeId::new(id.0),
        };

        match self.get_link_use_case.execute(params).await {
            Ok(link) => GetShortLinkResponse::Ok(Json(ShortLinkResponse {
                short_link: self.config.absolute_url(&link.path),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShortLinkResponse::NotFound(json),
                    _ => GetShortLinkResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResolveShortLinkResponse {
    #[oai(status = 302)]
    Found(#[oai(header = "Location")] String),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShortLinkResponse {
    #[oai(status = 200)]
    Ok(Json<ShortLinkResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
