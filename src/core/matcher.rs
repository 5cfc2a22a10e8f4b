use crate::core::{filters::matches_criteria, scoring::calculate_listing_score};
use crate::models::{Listing, ScoringWeights, SearchCriteria, SearchResult};

/// Default shortlist length
pub const DEFAULT_TOP_N: usize = 5;

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub results: Vec<SearchResult<'a>>,
    pub total_candidates: usize,
    pub eligible: usize,
}

/// Ranking orchestrator - filters, scores and orders listings
///
/// # Pipeline Stages
/// 1. Eligibility filtering
/// 2. Scoring
/// 3. Stable descending sort by score
/// 4. Truncation to the requested shortlist length
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank listings against the criteria
    ///
    /// Listings with equal scores keep their input order. `top_n` is not
    /// clamped here; callers pass at least 1.
    ///
    /// # Arguments
    /// * `listings` - Every listing in the repository, in repository order
    /// * `criteria` - The request's constraints and preferences
    /// * `top_n` - Maximum number of results to return
    pub fn find_matches<'a>(
        &self,
        listings: &'a [Listing],
        criteria: &SearchCriteria,
        top_n: usize,
    ) -> MatchResult<'a> {
        let total_candidates = listings.len();

        let mut results: Vec<SearchResult<'a>> = listings
            .iter()
            // Stage 1: Eligibility
            .filter(|listing| matches_criteria(listing, criteria))
            // Stage 2: Scoring
            .map(|listing| {
                let scored = calculate_listing_score(listing, criteria, &self.weights);
                SearchResult {
                    listing,
                    score: scored.total,
                    breakdown: scored.breakdown,
                    highlights: scored.highlights,
                }
            })
            .collect();

        let eligible = results.len();

        // Stage 3: sort_by is stable, so ties keep repository order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Stage 4: Shortlist
        results.truncate(top_n);

        tracing::debug!(
            total_candidates,
            eligible,
            returned = results.len(),
            "ranked listings"
        );

        MatchResult {
            results,
            total_candidates,
            eligible,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
