use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_catalog::api::router;
use course_catalog::client::{CourseApi, HttpCourseApi, NoopCourseApi};
use course_catalog::config::AppConfig;
use course_catalog::services::{CatalogRefresher, CourseAdapter, CourseService};
use course_catalog::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_catalog=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    let api: Arc<dyn CourseApi> = match config.course_api.clone() {
        Some(api_config) => {
            info!("using course backend at {}", api_config.base_url);
            Arc::new(HttpCourseApi::new(api_config)?)
        }
        None => {
            tracing::warn!("COURSE_API_URL is not set, serving an empty catalog");
            Arc::new(NoopCourseApi)
        }
    };

    let adapter = CourseAdapter::new(config.income_policy, config.thumbnail_placeholder.clone());
    let service = CourseService::new(api, adapter);

    let (catalog_tx, catalog_rx) = watch::channel(Arc::new(Vec::new()));
    let refresher = CatalogRefresher::new(service.clone(), catalog_tx, config.refresh_secs);
    refresher.refresh_once().await;
    tokio::spawn(refresher.start());

    let state = AppState {
        catalog: catalog_rx,
        courses: service,
    };

    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
