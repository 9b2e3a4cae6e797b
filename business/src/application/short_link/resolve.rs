use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::RecipeId;
use crate::domain::short_link::codec;
use crate::domain::short_link::errors::ShortLinkError;
use crate::domain::short_link::model::ShortLinkTarget;
use crate::domain::short_link::repository::RecipeLookupRepository;
use crate::domain::short_link::use_cases::resolve::{
    ResolveShortLinkParams, ResolveShortLinkUseCase,
};

pub struct ResolveShortLinkUseCaseImpl {
    pub repository: Arc<dyn RecipeLookupRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveShortLinkUseCase for ResolveShortLinkUseCaseImpl {
    async fn execute(
        &self,
        params: ResolveShortLinkParams,
    ) -> Result<ShortLinkTarget, ShortLinkError> {
        self.logger
            .debug(&format!("Resolving short link: {}", params.token));

        let decoded = codec::decode(&params.token).inspect_err(|_| {
            self.logger
                .warn(&format!("Rejected malformed short link: {}", params.token));
        })?;
        let recipe_id = i64::try_from(decoded)
            .map(RecipeId::new)
            .map_err(|_| ShortLinkError::InvalidToken)?;

        if !self.repository.recipe_exists(recipe_id).await? {
            self.logger.info(&format!(
                "Short link {} points to missing recipe {}",
                params.token, recipe_id
            ));
            return Err(ShortLinkError::RecipeNotFound);
        }

        Ok(ShortLinkTarget::new(recipe_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub RecipeLookupRepo {}

        #[async_trait]
        impl RecipeLookupRepository for RecipeLookupRepo {
            async fn recipe_exists(&self, id: RecipeId) -> Result<bool, RepositoryError>;
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

    #[tokio::test]
    async fn should_redirect_to_recipe_when_it_exists() {
        let mut mock_repo = MockRecipeLookupRepo::new();
        mock_repo
            .expect_recipe_exists()
            .withf(|id| *id == RecipeId::new(125))
            .returning(|_| Ok(true));

        let use_case = ResolveShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveShortLinkParams {
                token: "21".to_string(),
            })
            .await;

        let target = result.unwrap();
        assert_eq!(target.recipe_id, RecipeId::new(125));
        assert_eq!(target.location, "/recipes/125/");
    }

    #[tokio::test]
    async fn should_return_not_found_when_recipe_missing() {
        let mut mock_repo = MockRecipeLookupRepo::new();
        mock_repo.expect_recipe_exists().returning(|_| Ok(false));

        let use_case = ResolveShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveShortLinkParams {
                token: "Zz".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ShortLinkError::RecipeNotFound)));
    }

    #[tokio::test]
    async fn should_reject_token_without_hitting_repository() {
        let mut mock_repo = MockRecipeLookupRepo::new();
        mock_repo.expect_recipe_exists().never();

        let use_case = ResolveShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveShortLinkParams {
                token: "12_3".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ShortLinkError::InvalidToken)));
    }

    #[tokio::test]
    async fn should_reject_token_beyond_recipe_id_range() {
        let mut mock_repo = MockRecipeLookupRepo::new();
        mock_repo.expect_recipe_exists().never();

        let use_case = ResolveShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveShortLinkParams {
                token: codec::encode(u64::MAX),
            })
            .await;

        assert!(matches!(result, Err(ShortLinkError::InvalidToken)));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockRecipeLookupRepo::new();
        mock_repo
            .expect_recipe_exists()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = ResolveShortLinkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveShortLinkParams {
                token: "1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ShortLinkError::Repository(_))));
    }
}
