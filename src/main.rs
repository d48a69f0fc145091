use crate::config::FolioConfig;
use crate::content::remote::HttpContentSource;
use crate::services::catalog::CatalogService;
use axum::Router;
use dotenv;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub mod config;
pub mod content;
pub mod domain;
pub mod features;
pub mod services;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub config: Arc<FolioConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = Arc::new(FolioConfig::from_env());

    // the remote CMS is our only content backend
    let source = HttpContentSource::new(config.content_api_url.clone(), config.per_page);
    let catalog = CatalogService::new(Box::new(source), config.clone());

    let app_state = AppState {
        catalog: Arc::new(catalog),
        config: config.clone(),
    };

    println!("Starting server...");

    // api router, where features are composed
    let api_router = Router::new().nest("/learn", features::learning::learning_router());

    let app = Router::new()
        .nest("/api", api_router)
        .fallback_service(ServeDir::new(&config.frontend_path))
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    println!("Server listening on http://0.0.0.0:3000");

    axum::serve(listener, app).await?;

    Ok(())
}
