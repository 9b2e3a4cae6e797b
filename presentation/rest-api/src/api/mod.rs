pub mod error;
pub mod health {
    pub mod routes;
}
pub mod security;
pub mod shopping_list {
    pub mod error_mapper;
    pub mod routes;
}
pub mod short_link {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod tags;
