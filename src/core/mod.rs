// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use filters::{matches_criteria, matches_required_services};
pub use matcher::{Matcher, MatchResult, DEFAULT_TOP_N};
pub use normalize::{normalize, normalized_set, contains_normalized};
pub use scoring::{calculate_listing_score, calculate_transport_score, mode_availability, ListingScore};
