use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::short_link::errors::ShortLinkError;
use crate::domain::short_link::model::ShortLink;
use crate::domain::short_link::repository::RecipeLookupRepository;
use crate::domain::short_link::use_cases::get_link::{GetShortLinkParams, GetShortLinkUseCase};

pub struct GetShortLinkUseCaseImpl {
    pub repository: Arc<dyn RecipeLookupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShortLinkUseCase for GetShortLinkUseCaseImpl {
    async fn execute(&self, params: GetShortLinkParams) -> Result<ShortLink, ShortLinkError> {
        if !self.repository.recipe_exists(params.recipe_id).await? {
            return Err(ShortLinkError::RecipeNotFound);
        }

        let link = ShortLink::for_recipe(params.recipe_id);
        self.logger.info(&format!(
            "Short link {} issued for recipe {}",
            link.token, params.recipe_id
        ));
        Ok(link)
    }
}
