/// Identifier of a user account, as issued by the user store.
/// Used to scope the cart to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Identifier of a published recipe. Assigned once by the recipe store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(i64);

impl RecipeId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecipeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_integer() {
        let user_id = UserId::new(42);
        assert_eq!(user_id.value(), 42);
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new(7);
        assert_eq!(format!("{}", user_id), "7");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new(1), UserId::from(1));
        assert_ne!(UserId::new(1), UserId::new(2));
    }

    #[test]
    fn should_display_recipe_id() {
        let recipe_id = RecipeId::new(1234);
        assert_eq!(recipe_id.to_string(), "1234");
    }

    #[test]
    fn should_order_recipe_ids_numerically() {
        assert!(RecipeId::new(9) < RecipeId::new(10));
    }
}
