use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use college_match::config::Settings;
use college_match::core::Recommender;
use college_match::routes::{self, AppState};
use college_match::services::{Catalog, RecommendationCache};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting College Match recommendation service...");

    let catalog = Catalog::load(&settings.catalog.path).await.map_err(|e| {
        error!("Failed to load catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    info!("Catalog ready ({} institutions)", catalog.len());

    let cache = RecommendationCache::new(settings.cache.l1_cache_size, settings.cache.ttl_secs);

    info!(
        "Recommendation cache initialized (L1: {} entries, TTL: {}s)",
        settings.cache.l1_cache_size, settings.cache.ttl_secs
    );

    let policy = settings.ranking.policy();
    let recommender = Recommender::new(policy);

    info!("Recommender initialized with policy: {:?}", policy);

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        cache: Arc::new(cache),
        recommender,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
