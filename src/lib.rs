//! Terreno Scout - scoring and ranking of land-parcel listings
//!
//! This library filters an inventory of listings against search criteria,
//! scores the survivors on five weighted dimensions and returns a ranked
//! shortlist. The binary wraps it in a CLI and an HTTP API.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, matches_criteria, calculate_listing_score};
pub use models::{Listing, SearchCriteria, SearchResult, ScoreBreakdown, Highlights, ScoringWeights};
pub use services::{ListingRepository, RepositoryError};
