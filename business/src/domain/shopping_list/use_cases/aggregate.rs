use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::CartAggregateRow;

pub struct AggregateCartParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait AggregateCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AggregateCartParams,
    ) -> Result<Vec<CartAggregateRow>, ShoppingListError>;
}
