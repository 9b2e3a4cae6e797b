use async_trait::async_trait;

use crate::domain::shared::value_objects::RecipeId;
use crate::domain::short_link::errors::ShortLinkError;
use crate::domain::short_link::model::ShortLink;

pub struct GetShortLinkParams {
    pub recipe_id: RecipeId,
}

#[async_trait]
pub trait GetShortLinkUseCase: Send + Sync {
    async fn execute(&self, params: GetShortLinkParams) -> Result<ShortLink, ShortLinkError>;
}
