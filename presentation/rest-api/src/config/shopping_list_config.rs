use std::env;
use std::path::PathBuf;

/// Shopping list rendering settings
#[derive(Debug, Clone)]
pub struct ShoppingListConfig {
    pub font_dir: PathBuf,
}

impl ShoppingListConfig {
    /// Environment variables:
    /// - SHOPPING_LIST_FONT_DIR: Directory holding roboto_regular.ttf and
    ///   roboto_bold.ttf (default: "static/fonts")
    pub fn from_env() -> Self {
        let font_dir = env::var("SHOPPING_LIST_FONT_DIR").unwrap_or_else(|_| "static/fonts".to_string());
        Self {
            font_dir: PathBuf::from(font_dir),
        }
    }
}
