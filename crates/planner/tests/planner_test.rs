//! End-to-end tests: planner wired from config against local mock services.

use std::time::Duration;

use catalog::{ActivityCategory, TravelRequest, TravelStyle};
use mock_http::serve_once;
use planner::{
    NARRATIVE_FAILURE, PlannerConfig, Recommendation, TravelPlanner, UNAVAILABLE_NARRATIVE,
    enrich_recommendation,
};

fn paris_request() -> TravelRequest {
    TravelRequest::new("Paris", "May 5-9, 2025", 5000.0)
}

#[tokio::test]
async fn test_plan_without_keys_is_fully_offline() {
    let planner = TravelPlanner::from_config(&PlannerConfig::default(), "Paris").unwrap();
    let mut rec = planner.recommend(&paris_request()).await.unwrap();
    assert_eq!(rec.narrative, UNAVAILABLE_NARRATIVE);

    let source = PlannerConfig::default().attraction_source().unwrap();
    assert_eq!(enrich_recommendation(&mut rec, "Paris", source.as_ref()).await, 0);
    assert_eq!(rec.activities.len(), 11);
}

#[tokio::test]
async fn test_plan_with_mock_model_service() {
    let (llm, _) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"Day 1: Louvre"}]}}]}"#,
    )
    .await;
    let config = PlannerConfig {
        google_api_key: Some("test-key".to_string()),
        llm_base_url: Some(llm),
        timeout: Duration::from_secs(5),
        ..Default::default()
    };

    let planner = TravelPlanner::from_config(&config, "Paris").unwrap();
    let request = paris_request().with_travel_style(TravelStyle::Luxury);
    let rec = planner.recommend(&request).await.unwrap();

    assert_eq!(rec.narrative, "Day 1: Louvre");
    assert!(rec.flights.iter().all(|f| f.price <= request.budget));
}

#[tokio::test]
async fn test_model_error_degrades_to_apology() {
    let (llm, _) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let config = PlannerConfig {
        google_api_key: Some("test-key".to_string()),
        llm_base_url: Some(llm),
        ..Default::default()
    };

    let planner = TravelPlanner::from_config(&config, "Paris").unwrap();
    let rec = planner.recommend(&paris_request()).await.unwrap();
    assert_eq!(rec.narrative, NARRATIVE_FAILURE);
    assert_eq!(rec.flights.len(), 5);
}

#[tokio::test]
async fn test_enrichment_from_mock_search_service() {
    let (search, _) = serve_once(
        "200 OK",
        r#"{"places":[
            {"title":"Eiffel Tower","rating":4.7},
            {"title":"Sainte-Chapelle","rating":4.8,"description":"Gothic chapel"}
        ]}"#,
    )
    .await;
    let config = PlannerConfig {
        serper_api_key: Some("serper-key".to_string()),
        search_base_url: Some(search),
        ..Default::default()
    };

    let planner = TravelPlanner::from_config(&config, "Paris").unwrap();
    let mut rec = planner.recommend(&paris_request()).await.unwrap();
    let cost_before = rec.total_cost();

    let source = config.attraction_source().unwrap();
    let added = enrich_recommendation(&mut rec, "Paris", source.as_ref()).await;

    // "Eiffel Tower" is already in the catalog
    assert_eq!(added, 1);
    let chapel = rec.activities.last().unwrap();
    assert_eq!(chapel.name, "Sainte-Chapelle");
    assert_eq!(chapel.category, ActivityCategory::Sightseeing);
    assert_eq!(chapel.description.as_deref(), Some("Gothic chapel"));
    assert_eq!(rec.total_cost(), cost_before);
}

#[tokio::test]
async fn test_recommendation_serializes_for_export() {
    let planner = TravelPlanner::from_config(&PlannerConfig::default(), "Paris").unwrap();
    let rec = planner.recommend(&paris_request()).await.unwrap();

    let json = serde_json::to_string(&rec).unwrap();
    let back: Recommendation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rec);
}
