use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::repository::AuthTokenRepository;

/// Reads API tokens from the account service's token table.
pub struct AuthTokenRepositoryPostgres {
    pool: PgPool,
}

impl AuthTokenRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthTokenRepository for AuthTokenRepositoryPostgres {
    async fn find_user_by_token(&self, key: &str) -> Result<Option<UserId>, RepositoryError> {
        let user_id = sqlx::query_scalar::<_, i64>(
            "SELECT user_id::BIGINT FROM authtoken_token WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "token lookup failed");
            RepositoryError::database_error()
        })?;

        Ok(user_id.map(UserId::new))
    }
}
