// HTTP API tests for Terreno Scout

use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;
use terreno_scout::config::SearchSettings;
use terreno_scout::models::Listing;
use terreno_scout::routes::{configure_routes, AppState};
use terreno_scout::services::ListingRepository;

fn create_listing(id: &str, region: &str, property_type: &str, area_m2: f64, price_per_m2: f64) -> Listing {
    Listing {
        id: id.to_string(),
        name: format!("Terreno {}", id),
        region: region.to_string(),
        province: "Provincia".to_string(),
        commune: "Comuna".to_string(),
        locality: "Localidad".to_string(),
        property_type: property_type.to_string(),
        area_m2,
        price_per_m2,
        zoning: "ZI".to_string(),
        services: vec!["electricidad".to_string()],
        transport: BTreeMap::new(),
        topography: "plana".to_string(),
        notes: String::new(),
        url: None,
    }
}

fn test_state(listings_path: PathBuf) -> AppState {
    let repository = ListingRepository::from_listings(vec![
        create_listing("A", "Valparaíso", "Industrial", 30_000.0, 2_000.0),
        create_listing("B", "Maule", "Agrícola", 8_000.0, 800.0),
        create_listing("C", "Los Lagos", "Industrial", 50_000.0, 1_200.0),
    ])
    .unwrap();
    AppState::new(repository, listings_path, SearchSettings::default())
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(PathBuf::from("unused.json"))))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["listings"], 3);
}

#[actix_web::test]
async fn test_search_with_query_parameters() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(PathBuf::from("unused.json"))))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/search?property_type=industrial&min_area=2,5&area_unit=ha&top=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["eligible"], 2);
    assert_eq!(body["top"], 1);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0]["breakdown"]["location"].is_number());
    assert_eq!(results[0]["highlights"]["location"], "no_preference");
}

#[actix_web::test]
async fn test_search_with_json_body() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(PathBuf::from("unused.json"))))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/search")
        .set_json(json!({
            "criteria": { "preferred_regions": ["Maule"], "required_services": ["Electricidad"] },
            "top": 5
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["listing"]["id"], "B");
    let highlights = &results[0]["highlights"];
    assert_eq!(highlights["covered_services"], json!(["electricidad"]));
    assert_eq!(highlights["area_m2"], 8_000.0);
    assert_eq!(highlights["total_price"], 6_400_000.0);
    assert!(highlights.get("areaM2").is_none());
}

#[actix_web::test]
async fn test_search_rejects_invalid_top() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(PathBuf::from("unused.json"))))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/search")
        .set_json(json!({ "top": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_malformed_json_returns_error_body() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(PathBuf::from("unused.json"))))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/search")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_catalog() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(PathBuf::from("unused.json"))))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/catalog").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["macrozones"], json!(["Zona Austral", "Zona Centro", "Zona Centro-Sur"]));
    assert_eq!(body["property_types"], json!(["Agrícola", "Industrial"]));
}

#[actix_web::test]
async fn test_reload_swaps_repository() {
    let path = std::env::temp_dir().join(format!("terreno-scout-reload-{}.json", std::process::id()));
    let listings = vec![create_listing("Z", "Atacama", "Minero", 90_000.0, 150.0)];
    std::fs::write(&path, serde_json::to_string(&listings).unwrap()).unwrap();

    let state = test_state(path.clone());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/v1/listings/reload").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    std::fs::remove_file(&path).ok();

    assert_eq!(body["listings"], 1);
    assert_eq!(state.repository().len(), 1);
    assert_eq!(state.repository().listings()[0].id, "Z");
}

#[actix_web::test]
async fn test_reload_failure_keeps_repository() {
    let state = test_state(PathBuf::from("/definitely/not/here.json"));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/v1/listings/reload").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    assert_eq!(state.repository().len(), 3);
}
