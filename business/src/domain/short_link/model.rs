use crate::domain::shared::value_objects::RecipeId;

use super::codec;

/// A shareable short link for a recipe, relative to the public host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub token: String,
    pub path: String,
}

impl ShortLink {
    /// Builds the short link for a stored recipe. Store ids are positive, so the
    /// sign is never lost.
    pub fn for_recipe(recipe_id: RecipeId) -> Self {
        let token = codec::encode(recipe_id.value().unsigned_abs());
        let path = format!("/s/{}", token);
        Self { token, path }
    }
}

/// Where a resolved short link points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLinkTarget {
    pub recipe_id: RecipeId,
    pub location: String,
}

impl ShortLinkTarget {
    pub fn new(recipe_id: RecipeId) -> Self {
        Self {
            recipe_id,
            location: format!("/recipes/{}/", recipe_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_short_link_path_from_token() {
        let link = ShortLink::for_recipe(RecipeId::new(125));

        assert_eq!(link.token, "21");
        assert_eq!(link.path, "/s/21");
    }

    #[test]
    fn should_point_target_at_recipe_page() {
        let target = ShortLinkTarget::new(RecipeId::new(17));

        assert_eq!(target.location, "/recipes/17/");
    }
}
