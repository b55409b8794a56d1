use crate::core::Scorer;
use crate::models::{
    ErrorResponse, HealthResponse, RegionSummary, ScoreRequest, ScoreResponse, TribeSummary,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
///
/// The reference tables behind the scorer are read-only for the process
/// lifetime, so the state is shared across workers without locking.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Scorer,
}

/// Configure all scoring-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/score", web::post().to(score))
        .route("/regions", web::get().to(list_regions))
        .route("/tribes", web::get().to(list_tribes));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score endpoint
///
/// POST /api/v1/score
///
/// Request body:
/// ```json
/// {
///   "answers": { "politics_leftright": 3, "music_rock": 8 }
/// }
/// ```
async fn score(state: web::Data<AppState>, req: web::Json<ScoreRequest>) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::debug!("Scoring request with {} answers", req.answers.len());

    let outcome = state.scorer.score(&req.answers);

    tracing::info!(
        "Scored profile: best_region={:?}, tribe={:?}, similarity_index={}",
        outcome.regions.first().map(|r| r.region_id.as_str()),
        outcome.tribe.as_ref().map(|t| t.tribe_id.as_str()),
        outcome.similarity_index
    );

    HttpResponse::Ok().json(ScoreResponse::from(outcome))
}

/// Reference region listing
///
/// GET /api/v1/regions
async fn list_regions(state: web::Data<AppState>) -> impl Responder {
    let regions: Vec<RegionSummary> = state
        .scorer
        .data()
        .regions
        .iter()
        .map(|r| RegionSummary {
            id: r.id.clone(),
            name: r.name.clone(),
            count: r.count,
        })
        .collect();

    HttpResponse::Ok().json(regions)
}

/// Reference archetype listing
///
/// GET /api/v1/tribes
async fn list_tribes(state: web::Data<AppState>) -> impl Responder {
    let tribes: Vec<TribeSummary> = state
        .scorer
        .data()
        .tribes
        .iter()
        .map(|t| TribeSummary { id: t.id.clone() })
        .collect();

    HttpResponse::Ok().json(tribes)
}
