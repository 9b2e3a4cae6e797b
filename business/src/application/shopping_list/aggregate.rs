use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{CartAggregateRow, merge_rows};
use crate::domain::shopping_list::repository::CartRepository;
use crate::domain::shopping_list::use_cases::aggregate::{
    AggregateCartParams, AggregateCartUseCase,
};

pub struct AggregateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AggregateCartUseCase for AggregateCartUseCaseImpl {
    async fn execute(
        &self,
        params: AggregateCartParams,
    ) -> Result<Vec<CartAggregateRow>, ShoppingListError> {
        self.logger
            .info(&format!("Aggregating cart of user {}", params.user_id));

        let rows = self.repository.cart_aggregate_rows(params.user_id).await?;
        let merged = merge_rows(rows);

        self.logger
            .info(&format!("Aggregated {} shopping list rows", merged.len()));
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn cart_aggregate_rows(&self, user_id: UserId) -> Result<Vec<CartAggregateRow>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_user_id() -> UserId {
        UserId::new(3)
    }

    #[tokio::test]
    async fn should_merge_same_ingredient_from_two_recipes() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_cart_aggregate_rows()
            .withf(|user_id| *user_id == UserId::new(3))
            .returning(|_| {
                Ok(vec![
                    CartAggregateRow::new("Flour", "g", 200),
                    CartAggregateRow::new("Flour", "g", 300),
                ])
            });

        let use_case = AggregateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AggregateCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert_eq!(result.unwrap(), vec![CartAggregateRow::new("Flour", "g", 500)]);
    }

    #[tokio::test]
    async fn should_keep_distinct_units_as_separate_rows() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_cart_aggregate_rows().returning(|_| {
            Ok(vec![
                CartAggregateRow::new("Sugar", "g", 100),
                CartAggregateRow::new("Sugar", "ml", 50),
            ])
        });

        let use_case = AggregateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let rows = use_case
            .execute(AggregateCartParams {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].unit, "g");
        assert_eq!(rows[1].unit, "ml");
    }

    #[tokio::test]
    async fn should_return_empty_when_cart_is_empty() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_cart_aggregate_rows()
            .returning(|_| Ok(vec![]));

        let use_case = AggregateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AggregateCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_cart_aggregate_rows()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = AggregateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AggregateCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result, Err(ShoppingListError::Repository(_))));
    }
}
