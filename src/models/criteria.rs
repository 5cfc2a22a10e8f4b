use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::domain::M2_PER_HECTARE;

/// Search constraints and preferences for one request.
///
/// Every field is optional; an absent field places no constraint. Unknown
/// JSON fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub preferred_regions: Vec<String>,
    pub preferred_macrozones: Vec<String>,
    pub target_zonings: Vec<String>,
    pub min_area_m2: f64,
    pub min_area_hectares: f64,
    pub max_total_price: Option<f64>,
    pub max_price_per_m2: Option<f64>,
    pub required_services: Vec<String>,
    pub preferred_services: Vec<String>,
    pub transport_importance: BTreeMap<String, f64>,
    pub desired_property_types: Vec<String>,
}

impl SearchCriteria {
    /// Minimum area in m² implied by both area fields
    pub fn area_threshold_m2(&self) -> f64 {
        let min_m2 = self.min_area_m2.max(0.0);
        if self.min_area_hectares != 0.0 {
            min_m2.max(self.min_area_hectares * M2_PER_HECTARE)
        } else {
            min_m2
        }
    }
}
