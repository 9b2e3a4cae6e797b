use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::CartAggregateRow;
use business::domain::shopping_list::repository::CartRepository;

use super::entity::CartAggregateEntity;

const CART_AGGREGATE_QUERY: &str = r#"
    SELECT i.name AS ingredient_name,
           i.measurement_unit AS measurement_unit,
           SUM(ri.amount)::BIGINT AS total_amount
    FROM recipes_shoppingcart sc
    JOIN recipes_recipeingredient ri ON ri.recipe_id = sc.recipe_id
    JOIN recipes_ingredient i ON i.id = ri.ingredient_id
    WHERE sc.user_id = $1
    GROUP BY i.name, i.measurement_unit
    ORDER BY i.name, i.measurement_unit"#;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn cart_aggregate_rows(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CartAggregateRow>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartAggregateEntity>(CART_AGGREGATE_QUERY)
            .bind(user_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user_id, error = %e, "cart aggregation failed");
                RepositoryError::database_error()
            })?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
