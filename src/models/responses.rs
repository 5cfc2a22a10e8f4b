use serde::{Deserialize, Serialize};

use crate::models::domain::SearchResult;

/// Response for the search endpoints
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<'a> {
    pub results: Vec<SearchResult<'a>>,
    pub total_candidates: usize,
    pub eligible: usize,
    pub top: usize,
}

/// Option lists for building a search form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub macrozones: Vec<String>,
    pub regions: Vec<String>,
    pub property_types: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub listings: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Reload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub listings: usize,
    pub source: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
