use crate::core::normalize::{contains_normalized, normalized_set};
use crate::models::{Listing, SearchCriteria};

/// Check if a listing satisfies every hard constraint in the criteria
///
/// This is the eligibility stage that runs before scoring. Unset
/// constraints always pass; string comparisons ignore case.
#[inline]
pub fn matches_criteria(listing: &Listing, criteria: &SearchCriteria) -> bool {
    if !criteria.preferred_macrozones.is_empty()
        && !contains_normalized(&criteria.preferred_macrozones, listing.macrozone()) {
        return false;
    }

    if !criteria.preferred_regions.is_empty()
        && !contains_normalized(&criteria.preferred_regions, &listing.region) {
        return false;
    }

    if !criteria.desired_property_types.is_empty()
        && !contains_normalized(&criteria.desired_property_types, &listing.property_type) {
        return false;
    }

    if !criteria.target_zonings.is_empty()
        && !contains_normalized(&criteria.target_zonings, &listing.zoning) {
        return false;
    }

    if listing.area_m2 < criteria.area_threshold_m2() {
        return false;
    }

    if let Some(max_total) = criteria.max_total_price {
        if listing.total_price() > max_total {
            return false;
        }
    }

    if let Some(max_per_m2) = criteria.max_price_per_m2 {
        if listing.price_per_m2 > max_per_m2 {
            return false;
        }
    }

    matches_required_services(listing, criteria)
}

/// Check that every required service is offered by the listing
#[inline]
pub fn matches_required_services(listing: &Listing, criteria: &SearchCriteria) -> bool {
    if criteria.required_services.is_empty() {
        return true;
    }

    let available = normalized_set(&listing.services);
    normalized_set(&criteria.required_services)
        .iter()
        .all(|service| available.contains(service))
}
