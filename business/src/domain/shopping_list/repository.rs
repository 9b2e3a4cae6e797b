use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CartAggregateRow;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Ingredient totals over every recipe in the user's cart, ordered by name.
    async fn cart_aggregate_rows(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CartAggregateRow>, RepositoryError>;
}
