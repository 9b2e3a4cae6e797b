#[derive(Debug, thiserror::Error)]
pub enum ShortLinkError {
    #[error("short_link.invalid_token")]
    InvalidToken,
    #[error("short_link.recipe_not_found")]
    RecipeNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
