use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

/// Lookup of API tokens issued by the account service.
#[async_trait]
pub trait AuthTokenRepository: Send + Sync {
    async fn find_user_by_token(&self, key: &str) -> Result<Option<UserId>, RepositoryError>;
}
