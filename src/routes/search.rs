use actix_web::{web, HttpResponse, Responder};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use validator::Validate;

use crate::config::SearchSettings;
use crate::core::Matcher;
use crate::models::{
    CatalogResponse, ErrorResponse, HealthResponse, ReloadResponse, SearchCriteria, SearchQuery,
    SearchRequest, SearchResponse,
};
use crate::services::ListingRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    repository: Arc<RwLock<Arc<ListingRepository>>>,
    pub matcher: Matcher,
    pub listings_path: PathBuf,
    pub search: SearchSettings,
}

impl AppState {
    pub fn new(repository: ListingRepository, listings_path: PathBuf, search: SearchSettings) -> Self {
        Self {
            repository: Arc::new(RwLock::new(Arc::new(repository))),
            matcher: Matcher::default(),
            listings_path,
            search,
        }
    }

    /// Current repository; stays valid even if a reload swaps it out
    pub fn repository(&self) -> Arc<ListingRepository> {
        let guard = self
            .repository
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&*guard)
    }

    /// Swap in a freshly loaded repository
    pub fn replace_repository(&self, repository: ListingRepository) {
        let mut guard = self
            .repository
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(repository);
    }
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/search", web::get().to(search_form))
        .route("/search", web::post().to(search_json))
        .route("/catalog", web::get().to(catalog))
        .route("/listings/reload", web::post().to(reload_listings));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let listings = state.repository().len();
    let status = if listings > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        listings,
        timestamp: chrono::Utc::now(),
    })
}

/// Search with form-style query parameters
///
/// GET /api/v1/search?macrozona=Zona%20Centro&min_area=2&area_unit=ha&top=5
async fn search_form(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let criteria = query.to_criteria();
    let top = query.top(state.search.default_top, state.search.max_top);

    run_search(&state, &criteria, top)
}

/// Search with a JSON criteria document
///
/// POST /api/v1/search
///
/// Request body:
/// ```json
/// {
///   "criteria": { "required_services": ["electricidad"], "min_area_m2": 5000 },
///   "top": 5
/// }
/// ```
async fn search_json(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let top = req
        .top
        .map(usize::from)
        .unwrap_or(state.search.default_top)
        .clamp(1, state.search.max_top.max(1));

    run_search(&state, &req.criteria, top)
}

fn run_search(state: &AppState, criteria: &SearchCriteria, top: usize) -> HttpResponse {
    let repository = state.repository();
    let result = state.matcher.find_matches(repository.listings(), criteria, top);

    tracing::info!(
        "Returning {} listings (from {} eligible, {} candidates)",
        result.results.len(),
        result.eligible,
        result.total_candidates
    );

    HttpResponse::Ok().json(SearchResponse {
        results: result.results,
        total_candidates: result.total_candidates,
        eligible: result.eligible,
        top,
    })
}

/// Option lists for search forms
async fn catalog(state: web::Data<AppState>) -> impl Responder {
    let repository = state.repository();

    HttpResponse::Ok().json(CatalogResponse {
        macrozones: repository.macrozones(),
        regions: repository.regions(),
        property_types: repository.property_types(),
    })
}

/// Reload the listings file and swap the repository
///
/// POST /api/v1/listings/reload
async fn reload_listings(state: web::Data<AppState>) -> impl Responder {
    let path = state.listings_path.clone();
    let loaded = tokio::task::spawn_blocking(move || ListingRepository::load(path)).await;

    match loaded {
        Ok(Ok(repository)) => {
            let listings = repository.len();
            state.replace_repository(repository);
            tracing::info!("Reloaded {} listings from {}", listings, state.listings_path.display());

            HttpResponse::Ok().json(ReloadResponse {
                listings,
                source: state.listings_path.display().to_string(),
            })
        }
        Ok(Err(e)) => {
            tracing::error!("Failed to reload listings: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to reload listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
        Err(e) => {
            tracing::error!("Reload task failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to reload listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
