// Model exports
pub mod criteria;
pub mod domain;
pub mod regions;
pub mod requests;
pub mod responses;

pub use criteria::SearchCriteria;
pub use domain::{Listing, TransportValue, LocationMatch, ScoringWeights, ScoreBreakdown, Highlights, SearchResult};
pub use regions::{macrozone_for_region, UNKNOWN_MACROZONE};
pub use requests::{SearchRequest, SearchQuery};
pub use responses::{SearchResponse, CatalogResponse, HealthResponse, ReloadResponse, ErrorResponse};
