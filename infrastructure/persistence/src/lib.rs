pub mod db;
pub mod auth_token {
    pub mod repository;
}
pub mod recipe {
    pub mod repository;
}
pub mod shopping_cart {
    pub mod entity;
    pub mod repository;
}
