use super::document::ShoppingListDocument;
use super::errors::ShoppingListError;

/// Service port turning a laid-out shopping list into a printable file.
///
/// Implementations must not fail because a preferred font is missing; they
/// fall back to a built-in font instead.
pub trait ShoppingListRenderer: Send + Sync {
    fn render(&self, document: &ShoppingListDocument) -> Result<Vec<u8>, ShoppingListError>;
}
