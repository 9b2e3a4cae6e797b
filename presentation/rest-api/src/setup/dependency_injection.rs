use std::sync::Arc;

use logger::TracingLogger;
use pdf::fonts::FontSet;
use pdf::renderer::ShoppingListRendererPdf;
use persistence::auth_token::repository::AuthTokenRepositoryPostgres;
use persistence::recipe::repository::RecipeLookupRepositoryPostgres;
use persistence::shopping_cart::repository::CartRepositoryPostgres;

use business::application::short_link::get_link::GetShortLinkUseCaseImpl;
use business::application::short_link::resolve::ResolveShortLinkUseCaseImpl;
use business::application::shopping_list::aggregate::AggregateCartUseCaseImpl;
use business::application::shopping_list::download::DownloadShoppingListUseCaseImpl;
use business::domain::user::repository::AuthTokenRepository;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::HealthApi,
    pub short_link_api: crate::api::short_link::routes::ShortLinkApi,
    pub shopping_list_api: crate::api::shopping_list::routes::ShoppingListApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::HealthApi::new();

        // Infrastructure adapters
        let recipe_repository = Arc::new(RecipeLookupRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let auth_tokens: Arc<dyn AuthTokenRepository> =
            Arc::new(AuthTokenRepositoryPostgres::new(pool));
        let renderer = Arc::new(ShoppingListRendererPdf::new(FontSet::from_dir(
            &config.shopping_list.font_dir,
        )));

        // Short link use cases
        let resolve_use_case = Arc::new(ResolveShortLinkUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let get_link_use_case = Arc::new(GetShortLinkUseCaseImpl {
            repository: recipe_repository,
            logger: logger.clone(),
        });

        // Shopping list use cases
        let aggregate_use_case = Arc::new(AggregateCartUseCaseImpl {
            repository: cart_repository,
            logger: logger.clone(),
        });
        let download_use_case = Arc::new(DownloadShoppingListUseCaseImpl {
            aggregate_use_case,
            renderer,
            logger,
        });

        let short_link_api = crate::api::short_link::routes::ShortLinkApi::new(
            resolve_use_case,
            get_link_use_case,
            config.short_link.clone(),
        );
        let shopping_list_api = crate::api::shopping_list::routes::ShoppingListApi::new(
            download_use_case,
            auth_tokens,
        );

        Self {
            health_api,
            short_link_api,
            shopping_list_api,
        }
    }
}
