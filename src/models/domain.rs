use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::regions::macrozone_for_region;

/// Square meters in one hectare
pub const M2_PER_HECTARE: f64 = 10_000.0;

/// Land parcel available in the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub region: String,
    pub province: String,
    pub commune: String,
    pub locality: String,
    pub property_type: String,
    pub area_m2: f64,
    pub price_per_m2: f64,
    pub zoning: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub transport: BTreeMap<String, TransportValue>,
    #[serde(default)]
    pub topography: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Listing {
    /// Asking price for the whole parcel
    pub fn total_price(&self) -> f64 {
        self.area_m2 * self.price_per_m2
    }

    /// Macrozone the listing's region belongs to
    pub fn macrozone(&self) -> &'static str {
        macrozone_for_region(&self.region)
    }

    pub fn area_hectares(&self) -> f64 {
        self.area_m2 / M2_PER_HECTARE
    }
}

/// Value stored in a listing's transport map.
///
/// Inventories mix distances (`"distancia_km": 3.5`), flags
/// (`"ferrocarril": true`) and free text (`"carretera": "Ruta 5"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransportValue {
    Flag(bool),
    Distance(f64),
    Text(String),
    Empty,
}

impl TransportValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            TransportValue::Flag(flag) => *flag,
            TransportValue::Distance(value) => *value != 0.0,
            TransportValue::Text(text) => !text.is_empty(),
            TransportValue::Empty => false,
        }
    }

    pub fn as_distance(&self) -> Option<f64> {
        match self {
            TransportValue::Distance(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for TransportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportValue::Flag(flag) => write!(f, "{}", if *flag { "sí" } else { "no" }),
            TransportValue::Distance(value) => write!(f, "{}", value),
            TransportValue::Text(text) => f.write_str(text),
            TransportValue::Empty => f.write_str("-"),
        }
    }
}

/// How a listing's location relates to the requested regions/macrozones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMatch {
    PreferredRegion,
    AlternateRegion,
    PreferredMacrozone,
    AlternateMacrozone,
    NoPreference,
}

impl LocationMatch {
    pub fn label(&self) -> &'static str {
        match self {
            LocationMatch::PreferredRegion => "preferred region",
            LocationMatch::AlternateRegion => "alternate region",
            LocationMatch::PreferredMacrozone => "preferred macrozone",
            LocationMatch::AlternateMacrozone => "alternate macrozone",
            LocationMatch::NoPreference => "no preference",
        }
    }
}

impl fmt::Display for LocationMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed weights of the five scoring dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub location: f64,
    pub services: f64,
    pub price: f64,
    pub connectivity: f64,
    pub area: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 0.25,
            services: 0.40,
            price: 0.20,
            connectivity: 0.15,
            area: 0.20,
        }
    }
}

/// Weighted contribution of each dimension to a listing's score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub location: f64,
    pub services: f64,
    pub price: f64,
    pub connectivity: f64,
    pub area: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, value)| value).sum()
    }

    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("location", self.location),
            ("services", self.services),
            ("price", self.price),
            ("connectivity", self.connectivity),
            ("area", self.area),
        ]
    }
}

/// Display values derived while scoring; never used for ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlights {
    pub region: String,
    pub macrozone: String,
    pub location: LocationMatch,
    pub covered_services: Vec<String>,
    pub preferred_services: Vec<String>,
    pub total_price: f64,
    pub price_per_m2: f64,
    pub transport: BTreeMap<String, TransportValue>,
    pub area_m2: f64,
    pub area_ha: f64,
}

/// Scored listing; borrows the listing from the repository that owns it
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    pub listing: &'a Listing,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub highlights: Highlights,
}
