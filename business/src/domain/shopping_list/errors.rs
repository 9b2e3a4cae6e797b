#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.empty_cart")]
    EmptyCart,
    #[error("shopping_list.render_failed")]
    RenderFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
