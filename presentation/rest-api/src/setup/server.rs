use poem::middleware::{NormalizePath, TrailingSlash};
use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.short_link_api,
                container.shopping_list_api,
            ),
            "Foodgram API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let routes = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec);
        let app = trim_trailing_slash(routes).with(config.cors).with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Serves `/s/21/` and `/s/21` from the same route, as links issued by the
/// web client carry a trailing slash.
pub fn trim_trailing_slash<E: Endpoint>(endpoint: E) -> impl Endpoint {
    endpoint.with(NormalizePath::new(TrailingSlash::Trim))
}
