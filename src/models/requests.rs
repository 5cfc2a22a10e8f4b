use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::criteria::SearchCriteria;

/// JSON body for `POST /search`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[serde(default)]
    pub criteria: SearchCriteria,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub top: Option<u16>,
}

/// Query string for `GET /search`, mirroring the search form fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub macrozona: Option<String>,
    pub region: Option<String>,
    pub property_type: Option<String>,
    pub min_area: Option<String>,
    pub area_unit: Option<String>,
    pub required_services: Option<String>,
    pub preferred_services: Option<String>,
    pub max_price: Option<String>,
    pub max_price_m2: Option<String>,
    pub top: Option<String>,
}

impl SearchQuery {
    /// Build criteria from the form fields; blank or unparsable values are skipped
    pub fn to_criteria(&self) -> SearchCriteria {
        let mut criteria = SearchCriteria::default();

        if let Some(zone) = non_blank(&self.macrozona) {
            criteria.preferred_macrozones = vec![zone.to_string()];
        }
        if let Some(region) = non_blank(&self.region) {
            criteria.preferred_regions = vec![region.to_string()];
        }
        if let Some(property_type) = non_blank(&self.property_type) {
            criteria.desired_property_types = vec![property_type.to_string()];
        }

        if let Some(min_area) = positive_number(&self.min_area) {
            if self.area_unit.as_deref() == Some("ha") {
                criteria.min_area_hectares = min_area;
            } else {
                criteria.min_area_m2 = min_area;
            }
        }

        criteria.required_services = split_list(self.required_services.as_deref());
        criteria.preferred_services = split_list(self.preferred_services.as_deref());
        criteria.max_total_price = positive_number(&self.max_price);
        criteria.max_price_per_m2 = positive_number(&self.max_price_m2);

        criteria
    }

    /// Requested result count, falling back to `default` and clamped to `1..=max`
    pub fn top(&self, default: usize, max: usize) -> usize {
        let requested = non_blank(&self.top)
            .and_then(|raw| raw.parse::<i64>().ok())
            .map(|value| value.max(1) as usize)
            .unwrap_or(default);
        requested.clamp(1, max.max(1))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn positive_number(value: &Option<String>) -> Option<f64> {
    non_blank(value)
        .and_then(parse_localized_number)
        .filter(|number| *number > 0.0)
}

/// Parse a number written with Chilean conventions.
///
/// `.` groups thousands and `,` marks decimals: `"1.234.567,5"` → `1234567.5`.
/// Spaces and non-breaking spaces are ignored.
pub fn parse_localized_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized: String = trimmed
        .chars()
        .filter(|c| *c != '\u{a0}' && *c != ' ' && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    // keep only the last decimal separator
    let separators = normalized.matches('.').count();
    let normalized = if separators > 1 {
        normalized.replacen('.', "", separators - 1)
    } else {
        normalized
    };

    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Split a comma or semicolon separated list, dropping blank entries
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split([',', ';'])
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
