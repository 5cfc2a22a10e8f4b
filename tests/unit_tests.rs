// Unit tests for Terreno Scout

use std::collections::BTreeMap;
use terreno_scout::core::{
    filters::matches_criteria,
    scoring::{calculate_listing_score, calculate_transport_score, mode_availability},
};
use terreno_scout::models::{
    macrozone_for_region, Listing, LocationMatch, ScoringWeights, SearchCriteria, TransportValue,
    UNKNOWN_MACROZONE,
};

fn base_listing() -> Listing {
    Listing {
        id: "R-9".to_string(),
        name: "Lote Los Ángeles".to_string(),
        region: "Biobío".to_string(),
        province: "Biobío".to_string(),
        commune: "Los Ángeles".to_string(),
        locality: "Santa Fe".to_string(),
        property_type: "Industrial".to_string(),
        area_m2: 20_000.0,
        price_per_m2: 2_000.0,
        zoning: "ZI-3".to_string(),
        services: vec!["Agua".to_string(), "Electricidad".to_string()],
        transport: [
            ("carretera".to_string(), TransportValue::Text("Ruta 5".to_string())),
            ("ferrocarril".to_string(), TransportValue::Flag(false)),
            ("aeropuerto_km".to_string(), TransportValue::Distance(25.0)),
        ]
        .into_iter()
        .collect(),
        topography: "plana".to_string(),
        notes: String::new(),
        url: Some("https://example.cl/r-9".to_string()),
    }
}

#[test]
fn test_listing_derived_fields() {
    let listing = base_listing();
    assert_eq!(listing.total_price(), 40_000_000.0);
    assert_eq!(listing.macrozone(), "Zona Sur");
    assert_eq!(listing.area_hectares(), 2.0);
}

#[test]
fn test_unknown_region_macrozone() {
    assert_eq!(macrozone_for_region("Mendoza"), UNKNOWN_MACROZONE);
}

#[test]
fn test_no_constraints_accepts_listing() {
    assert!(matches_criteria(&base_listing(), &SearchCriteria::default()));
}

#[test]
fn test_each_violated_constraint_rejects() {
    let listing = base_listing();
    let violations = vec![
        SearchCriteria { preferred_macrozones: vec!["Norte Grande".to_string()], ..Default::default() },
        SearchCriteria { preferred_regions: vec!["Maule".to_string()], ..Default::default() },
        SearchCriteria { desired_property_types: vec!["Agrícola".to_string()], ..Default::default() },
        SearchCriteria { target_zonings: vec!["ZR".to_string()], ..Default::default() },
        SearchCriteria { min_area_m2: 20_001.0, ..Default::default() },
        SearchCriteria { min_area_hectares: 2.5, ..Default::default() },
        SearchCriteria { max_total_price: Some(39_999_999.0), ..Default::default() },
        SearchCriteria { max_price_per_m2: Some(1_999.0), ..Default::default() },
        SearchCriteria { required_services: vec!["gas".to_string()], ..Default::default() },
    ];

    for criteria in violations {
        assert!(!matches_criteria(&listing, &criteria), "should reject: {:?}", criteria);
    }
}

#[test]
fn test_all_constraints_satisfied() {
    let criteria = SearchCriteria {
        preferred_macrozones: vec!["ZONA SUR".to_string()],
        preferred_regions: vec!["biobío".to_string()],
        desired_property_types: vec!["industrial".to_string()],
        target_zonings: vec!["zi-3".to_string()],
        min_area_hectares: 2.0,
        max_total_price: Some(40_000_000.0),
        max_price_per_m2: Some(2_000.0),
        required_services: vec!["agua".to_string()],
        ..Default::default()
    };

    assert!(matches_criteria(&base_listing(), &criteria));
}

#[test]
fn test_location_case_sensitivity_differs_from_filter() {
    let listing = base_listing();
    let criteria = SearchCriteria {
        preferred_regions: vec!["biobío".to_string()],
        ..Default::default()
    };

    // passes the filter but scores as an alternate region
    assert!(matches_criteria(&listing, &criteria));
    let score = calculate_listing_score(&listing, &criteria, &ScoringWeights::default());
    assert_eq!(score.highlights.location, LocationMatch::AlternateRegion);
    assert!((score.breakdown.location - 0.4 * 0.25).abs() < 1e-12);
}

#[test]
fn test_full_score_computation() {
    let listing = base_listing();
    let mut importance = BTreeMap::new();
    importance.insert("carretera".to_string(), 1.0);
    importance.insert("aeropuerto".to_string(), 1.0);

    let criteria = SearchCriteria {
        preferred_regions: vec!["Biobío".to_string()],
        min_area_m2: 10_000.0,
        max_total_price: Some(80_000_000.0),
        required_services: vec!["agua".to_string(), "gas".to_string()],
        preferred_services: vec!["electricidad".to_string()],
        transport_importance: importance,
        ..Default::default()
    };

    let score = calculate_listing_score(&listing, &criteria, &ScoringWeights::default());

    let location = 1.0 * 0.25;
    let services = 0.4 * (0.6 * 0.5 + 0.4 * 1.0);
    let price = 0.5 * 0.2;
    let connectivity = (0.5 * 0.7 + 0.5 * 0.5) * 0.15;
    let area = 0.5 * 0.2;

    assert!((score.breakdown.location - location).abs() < 1e-12);
    assert!((score.breakdown.services - services).abs() < 1e-12);
    assert!((score.breakdown.price - price).abs() < 1e-12);
    assert!((score.breakdown.connectivity - connectivity).abs() < 1e-12);
    assert!((score.breakdown.area - area).abs() < 1e-12);
    assert!((score.total - (location + services + price + connectivity + area)).abs() < 1e-9);
}

#[test]
fn test_transport_mode_names_ignore_case() {
    let listing = base_listing();
    assert_eq!(mode_availability("FERROCARRIL", &listing.transport), 0.0);
    assert!((mode_availability("Aeropuerto", &listing.transport) - 0.5).abs() < 1e-12);
}

#[test]
fn test_transport_negative_weights_still_normalize() {
    let listing = base_listing();
    let mut importance = BTreeMap::new();
    importance.insert("carretera".to_string(), 2.0);
    importance.insert("ferrocarril".to_string(), -1.0);

    // sum is 1, so weights stay as given
    let score = calculate_transport_score(&listing.transport, &importance);
    assert!((score - 2.0 * 0.7).abs() < 1e-12);
}

#[test]
fn test_price_over_budget_clamps_at_zero() {
    let listing = base_listing();
    let criteria = SearchCriteria {
        max_total_price: Some(10_000_000.0),
        max_price_per_m2: Some(500.0),
        ..Default::default()
    };

    let score = calculate_listing_score(&listing, &criteria, &ScoringWeights::default());
    assert_eq!(score.breakdown.price, 0.0);
}
