use super::{
    cors_config, server_config::ServerConfig, shopping_list_config::ShoppingListConfig,
    short_link_config::ShortLinkConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub short_link: ShortLinkConfig,
    pub shopping_list: ShoppingListConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            short_link: ShortLinkConfig::from_env(),
            shopping_list: ShoppingListConfig::from_env(),
        }
    }
}
