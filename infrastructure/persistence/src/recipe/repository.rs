use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::RecipeId;
use business::domain::short_link::repository::RecipeLookupRepository;

pub struct RecipeLookupRepositoryPostgres {
    pool: PgPool,
}

impl RecipeLookupRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeLookupRepository for RecipeLookupRepositoryPostgres {
    async fn recipe_exists(&self, id: RecipeId) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM recipes_recipe WHERE id = $1)",
        )
        .bind(id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(recipe_id = %id, error = %e, "recipe lookup failed");
            RepositoryError::database_error()
        })
    }
}
