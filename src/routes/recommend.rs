use actix_web::{web, HttpResponse, Responder};
use crate::core::Recommender;
use crate::models::{ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse};
use crate::routes::summary::generate_summary;
use crate::services::{Catalog, RecommendationCache};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cache: Arc<RecommendationCache>,
    pub recommender: Recommender,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.catalog.len(),
        cache_entries: state.cache.stats().entries,
    })
}

/// Recommend endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "exam": "JEE Main",
///   "rank": 5000,
///   "maxBudget": 1000000,
///   "region": "Any",
///   "preferredState": "Any",
///   "branch": "Computer Science"
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    let preferences = match req.into_inner().into_preferences() {
        Ok(preferences) => preferences,
        Err(errors) => {
            tracing::info!("Validation failed for recommend request: {:?}", errors);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: "Please provide exam, rank (1 to 200,000) and budget.".to_string(),
                status_code: 400,
            });
        }
    };

    tracing::info!(
        "Recommending for {} rank {} with budget {}",
        preferences.exam,
        preferences.rank,
        preferences.max_budget
    );

    let recommendations = state
        .cache
        .get_or_compute(&preferences, || {
            state
                .recommender
                .recommend(state.catalog.institutions(), &preferences)
                .recommendations
        })
        .await;

    let response = RecommendResponse {
        success: true,
        summary: generate_summary(&preferences, recommendations.len()),
        total_matches: recommendations.len(),
        recommendations: recommendations.to_vec(),
    };

    tracing::info!(
        "Returning {} recommendations for {} rank {}",
        response.total_matches,
        preferences.exam,
        preferences.rank
    );

    HttpResponse::Ok().json(response)
}
