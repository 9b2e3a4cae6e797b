use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::RecipeId;

/// Read-only view of the recipe store needed to validate short links.
#[async_trait]
pub trait RecipeLookupRepository: Send + Sync {
    async fn recipe_exists(&self, id: RecipeId) -> Result<bool, RepositoryError>;
}
