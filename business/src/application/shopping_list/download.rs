use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::document::ShoppingListDocument;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListFile;
use crate::domain::shopping_list::services::ShoppingListRenderer;
use crate::domain::shopping_list::use_cases::aggregate::{
    AggregateCartParams, AggregateCartUseCase,
};
use crate::domain::shopping_list::use_cases::download::{
    DownloadShoppingListParams, DownloadShoppingListUseCase,
};

pub struct DownloadShoppingListUseCaseImpl {
    pub aggregate_use_case: Arc<dyn AggregateCartUseCase>,
    pub renderer: Arc<dyn ShoppingListRenderer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DownloadShoppingListUseCase for DownloadShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: DownloadShoppingListParams,
    ) -> Result<ShoppingListFile, ShoppingListError> {
        let rows = self
            .aggregate_use_case
            .execute(AggregateCartParams {
                user_id: params.user_id,
            })
            .await?;

        if rows.is_empty() {
            self.logger.info(&format!(
                "Shopping list requested with empty cart by user {}",
                params.user_id
            ));
            return Err(ShoppingListError::EmptyCart);
        }

        let generated_at = Utc::now();
        let document = ShoppingListDocument::compose(&rows, generated_at);
        let content = self.renderer.render(&document).inspect_err(|e| {
            self.logger
                .error(&format!("Failed to render shopping list: {}", e));
        })?;

        let file = ShoppingListFile::new(content, generated_at);
        self.logger.info(&format!(
            "Rendered {} ({} pages, {} bytes)",
            file.filename,
            document.pages.len(),
            file.content.len()
        ));
        Ok(file)
    }
}
