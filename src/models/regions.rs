//! Region → macrozone lookup for Chilean first-level administrative regions.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::normalize::fold_region_key;

/// Macrozone reported for regions missing from the table
pub const UNKNOWN_MACROZONE: &str = "Zona Desconocida";

const REGION_MACROZONES: &[(&str, &str)] = &[
    ("Arica y Parinacota", "Norte Grande"),
    ("Tarapacá", "Norte Grande"),
    ("Antofagasta", "Norte Grande"),
    ("Atacama", "Norte Chico"),
    ("Coquimbo", "Norte Chico"),
    ("Valparaíso", "Zona Centro"),
    ("Metropolitana de Santiago", "Zona Centro"),
    ("Libertador General Bernardo O'Higgins", "Zona Centro"),
    ("O'Higgins", "Zona Centro"),
    ("Maule", "Zona Centro-Sur"),
    ("Ñuble", "Zona Sur"),
    ("Biobío", "Zona Sur"),
    ("La Araucanía", "Zona Sur"),
    ("Los Ríos", "Zona Sur"),
    ("Los Lagos", "Zona Austral"),
    ("Aysén del General Carlos Ibáñez del Campo", "Zona Austral"),
    ("Magallanes y de la Antártica Chilena", "Zona Austral"),
];

static MACROZONE_BY_REGION: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| REGION_MACROZONES.iter().copied().collect());

// Keyed by folded name so spelling variants land on the same entry
static MACROZONE_BY_FOLDED_REGION: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    REGION_MACROZONES
        .iter()
        .map(|(region, zone)| (fold_region_key(region), *zone))
        .collect()
});

/// Resolve the macrozone for a region name.
///
/// Exact names hit directly; otherwise the name is folded (case, Spanish
/// diacritics, typographic apostrophes) before a second lookup.
pub fn macrozone_for_region(region: &str) -> &'static str {
    if let Some(zone) = MACROZONE_BY_REGION.get(region) {
        return zone;
    }

    MACROZONE_BY_FOLDED_REGION
        .get(&fold_region_key(region))
        .copied()
        .unwrap_or(UNKNOWN_MACROZONE)
}
