use std::collections::BTreeMap;

use crate::core::normalize::{normalize, normalized_set};
use crate::models::{
    Highlights, Listing, LocationMatch, ScoreBreakdown, ScoringWeights, SearchCriteria,
    TransportValue,
};

/// Connectivity value used when the criteria weight no transport mode
const NEUTRAL_CONNECTIVITY: f64 = 0.6;
/// Price value used when the criteria set no price ceiling
const NEUTRAL_PRICE: f64 = 0.6;
/// Preferred-services value used when the criteria list none
const NEUTRAL_PREFERRED_SERVICES: f64 = 0.5;
/// Price ratios are clamped here before being inverted
const MAX_PRICE_RATIO: f64 = 1.5;
/// Area score saturates once a listing reaches this multiple of the threshold
const AREA_SATURATION_MULTIPLE: f64 = 4.0;

const ROAD_FULL_CREDIT_KM: f64 = 10.0;
const AIRPORT_FULL_CREDIT_KM: f64 = 50.0;

/// Total score of one listing plus the values that explain it
#[derive(Debug, Clone, PartialEq)]
pub struct ListingScore {
    pub total: f64,
    pub breakdown: ScoreBreakdown,
    pub highlights: Highlights,
}

/// Score a listing against search criteria
///
/// Scoring formula:
/// score = (
///     location * 0.25 +        # Preferred region/macrozone = higher
///     services * 0.40 +        # Required coverage and preferred extras
///     price * 0.20 +           # Cheaper relative to the ceilings = higher
///     connectivity * 0.15 +    # Weighted transport availability
///     area * 0.20              # Saturates at 4x the minimum area
/// )
///
/// The result is nominally within [0, 1]; negative transport distances or
/// negative importance weights can push it slightly outside.
pub fn calculate_listing_score(
    listing: &Listing,
    criteria: &SearchCriteria,
    weights: &ScoringWeights,
) -> ListingScore {
    let (location_score, location_match) = calculate_location_score(listing, criteria);
    let services = calculate_services_score(listing, criteria);
    let price_score = calculate_price_score(listing, criteria);
    let connectivity_score =
        calculate_transport_score(&listing.transport, &criteria.transport_importance);
    let area_score = calculate_area_score(listing.area_m2, criteria.area_threshold_m2());

    let breakdown = ScoreBreakdown {
        location: location_score * weights.location,
        services: services.score * weights.services,
        price: price_score * weights.price,
        connectivity: connectivity_score * weights.connectivity,
        area: area_score * weights.area,
    };

    let highlights = Highlights {
        region: listing.region.clone(),
        macrozone: listing.macrozone().to_string(),
        location: location_match,
        covered_services: services.covered,
        preferred_services: services.preferred,
        total_price: round_cents(listing.total_price()),
        price_per_m2: listing.price_per_m2,
        transport: listing.transport.clone(),
        area_m2: listing.area_m2,
        area_ha: listing.area_hectares(),
    };

    ListingScore {
        total: breakdown.total(),
        breakdown,
        highlights,
    }
}

/// Calculate location score (0-1)
///
/// Region and macrozone membership here compare raw strings, unlike the
/// eligibility filter which ignores case.
#[inline]
fn calculate_location_score(listing: &Listing, criteria: &SearchCriteria) -> (f64, LocationMatch) {
    if !criteria.preferred_regions.is_empty() {
        if criteria.preferred_regions.iter().any(|region| *region == listing.region) {
            (1.0, LocationMatch::PreferredRegion)
        } else {
            (0.4, LocationMatch::AlternateRegion)
        }
    } else if !criteria.preferred_macrozones.is_empty() {
        let macrozone = listing.macrozone();
        if criteria.preferred_macrozones.iter().any(|zone| zone == macrozone) {
            (0.9, LocationMatch::PreferredMacrozone)
        } else {
            (0.5, LocationMatch::AlternateMacrozone)
        }
    } else {
        (0.7, LocationMatch::NoPreference)
    }
}

struct ServicesScore {
    score: f64,
    covered: Vec<String>,
    preferred: Vec<String>,
}

/// Calculate services score (0-1)
/// 60% coverage of required services, 40% share of preferred services present
#[inline]
fn calculate_services_score(listing: &Listing, criteria: &SearchCriteria) -> ServicesScore {
    let available = normalized_set(&listing.services);
    let required = normalized_set(&criteria.required_services);
    let preferred = normalized_set(&criteria.preferred_services);

    let covered: Vec<String> = required.intersection(&available).cloned().collect();
    let preferred_found: Vec<String> = preferred.intersection(&available).cloned().collect();

    let coverage = if required.is_empty() {
        1.0
    } else {
        covered.len() as f64 / required.len() as f64
    };
    let preferred_score = if preferred.is_empty() {
        NEUTRAL_PREFERRED_SERVICES
    } else {
        preferred_found.len() as f64 / preferred.len() as f64
    };

    ServicesScore {
        score: 0.6 * coverage + 0.4 * preferred_score,
        covered,
        preferred: preferred_found,
    }
}

/// Calculate price score (0-1)
/// Total-price and per-m² ceilings are averaged when both are set
#[inline]
fn calculate_price_score(listing: &Listing, criteria: &SearchCriteria) -> f64 {
    let mut score = match positive(criteria.max_total_price) {
        Some(max_total) => price_ratio_score(listing.total_price() / max_total),
        None => NEUTRAL_PRICE,
    };

    if let Some(max_per_m2) = positive(criteria.max_price_per_m2) {
        score = (score + price_ratio_score(listing.price_per_m2 / max_per_m2)) / 2.0;
    }

    score
}

#[inline]
fn price_ratio_score(ratio: f64) -> f64 {
    (1.0 - ratio.min(MAX_PRICE_RATIO)).max(0.0)
}

#[inline]
fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Calculate area score (0-1)
/// Thresholds below 1 m² are floored to 1 to keep the ratio finite
#[inline]
fn calculate_area_score(area_m2: f64, threshold_m2: f64) -> f64 {
    let ratio = area_m2 / threshold_m2.max(1.0);
    (ratio / AREA_SATURATION_MULTIPLE).min(1.0)
}

/// Calculate connectivity score (0-1)
///
/// Importance weights are normalized to sum to 1 (a zero sum is treated
/// as 1), then each mode contributes `weight * availability`.
pub fn calculate_transport_score(
    transport: &BTreeMap<String, TransportValue>,
    importance: &BTreeMap<String, f64>,
) -> f64 {
    if importance.is_empty() {
        return NEUTRAL_CONNECTIVITY;
    }

    let sum: f64 = importance.values().sum();
    let total = if sum == 0.0 { 1.0 } else { sum };

    importance
        .iter()
        .map(|(mode, weight)| (weight / total) * mode_availability(mode, transport))
        .sum()
}

/// Availability (0-1) of a single transport mode for a listing
pub fn mode_availability(mode: &str, transport: &BTreeMap<String, TransportValue>) -> f64 {
    let mode = normalize(mode);
    match mode.as_str() {
        "carretera" => match transport.get("distancia_km").and_then(TransportValue::as_distance) {
            Some(distance) => distance_score(distance, ROAD_FULL_CREDIT_KM),
            None if transport.contains_key("carretera") => 0.7,
            None => 0.0,
        },
        "ferrocarril" => match transport.get("ferrocarril") {
            Some(TransportValue::Flag(available)) => f64::from(u8::from(*available)),
            Some(value) if value.is_truthy() => 0.5,
            _ => 0.0,
        },
        "aeropuerto" => transport
            .get("aeropuerto_km")
            .and_then(TransportValue::as_distance)
            .map(|distance| distance_score(distance, AIRPORT_FULL_CREDIT_KM))
            .unwrap_or(0.0),
        other => match transport.get(other) {
            Some(value) if value.is_truthy() => 0.5,
            _ => 0.0,
        },
    }
}

/// Linear decay from full credit at 0 km to none at `zero_at_km`
#[inline]
fn distance_score(distance_km: f64, zero_at_km: f64) -> f64 {
    (1.0 - (distance_km / zero_at_km).min(1.0)).max(0.0)
}

#[inline]
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
