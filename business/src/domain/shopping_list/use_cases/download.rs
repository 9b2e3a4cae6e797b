use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListFile;

pub struct DownloadShoppingListParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait DownloadShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: DownloadShoppingListParams,
    ) -> Result<ShoppingListFile, ShoppingListError>;
}
