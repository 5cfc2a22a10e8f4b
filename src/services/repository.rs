use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::Matcher;
use crate::models::{Listing, SearchCriteria, SearchResult};

/// Errors that can occur while loading listings or criteria
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid listing {id}: {reason}")]
    InvalidListing { id: String, reason: String },
}

/// Immutable inventory of listings
///
/// Built once and shared read-only; reloading produces a new instance
/// instead of mutating this one.
#[derive(Debug, Clone, Default)]
pub struct ListingRepository {
    listings: Vec<Listing>,
}

impl ListingRepository {
    /// Build a repository from already-parsed listings
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, RepositoryError> {
        for listing in &listings {
            validate_listing(listing)?;
        }
        Ok(Self { listings })
    }

    /// Load listings from a JSON array on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let listings: Vec<Listing> =
            serde_json::from_str(&raw).map_err(|source| RepositoryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let repository = Self::from_listings(listings)?;
        tracing::info!("Loaded {} listings from {}", repository.len(), path.display());
        Ok(repository)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Ranked shortlist for the criteria using the standard weights
    pub fn search(&self, criteria: &SearchCriteria, top_n: usize) -> Vec<SearchResult<'_>> {
        Matcher::default()
            .find_matches(&self.listings, criteria, top_n)
            .results
    }

    /// Sorted, distinct macrozones present in the inventory
    pub fn macrozones(&self) -> Vec<String> {
        distinct_sorted(self.listings.iter().map(|listing| listing.macrozone()))
    }

    /// Sorted, distinct regions present in the inventory
    pub fn regions(&self) -> Vec<String> {
        distinct_sorted(self.listings.iter().map(|listing| listing.region.as_str()))
    }

    /// Sorted, distinct property types present in the inventory
    pub fn property_types(&self) -> Vec<String> {
        distinct_sorted(self.listings.iter().map(|listing| listing.property_type.as_str()))
    }
}

fn validate_listing(listing: &Listing) -> Result<(), RepositoryError> {
    if listing.area_m2.is_nan() || listing.area_m2 <= 0.0 {
        return Err(RepositoryError::InvalidListing {
            id: listing.id.clone(),
            reason: format!("area_m2 must be positive, got {}", listing.area_m2),
        });
    }
    if listing.price_per_m2.is_nan() || listing.price_per_m2 < 0.0 {
        return Err(RepositoryError::InvalidListing {
            id: listing.id.clone(),
            reason: format!("price_per_m2 must not be negative, got {}", listing.price_per_m2),
        });
    }
    Ok(())
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Load search criteria from a JSON file
pub fn load_criteria<P: AsRef<Path>>(path: P) -> Result<SearchCriteria, RepositoryError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| RepositoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| RepositoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
