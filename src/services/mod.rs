// Service exports
pub mod repository;

pub use repository::{load_criteria, ListingRepository, RepositoryError};
