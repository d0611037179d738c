// API Integration Tests
//
// Exercises every endpoint against the bundled sample snapshot.
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use farm_query_engine::{create_router, AppState, EngineConfig};
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tower::ServiceExt; // for oneshot

    fn create_test_app() -> axum::Router {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample");
        let state = AppState::new(data_dir, EngineConfig::default()).unwrap();
        create_router(state)
    }

    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["projects"], 6);
        assert_eq!(body["funders"], 2);
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Snapshot Queries
    // =========================================================================

    #[tokio::test]
    async fn test_query_state_breakdown() {
        let response = create_test_app()
            .oneshot(post_json("/api/query", json!({ "query": "How many projects in California?" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["type"], "data");
        assert!(body["answer"].as_str().unwrap().contains("**3 projects**"));
        assert_eq!(body["suggestedActions"][0]["action"], "/map?state=CA");
        assert!(body["blocks"].as_array().unwrap().len() > 1);
    }

    #[tokio::test]
    async fn test_query_cached_answer_is_identical() {
        let app = create_test_app();

        let first = app
            .clone()
            .oneshot(post_json("/api/query", json!({ "query": "Carbon estimate" })))
            .await
            .unwrap();
        let first = json_response(first).await;

        // Differs only in case and spacing, so it hits the same cache entry
        let second = app
            .oneshot(post_json("/api/query", json!({ "query": "  carbon   ESTIMATE " })))
            .await
            .unwrap();
        let second = json_response(second).await;

        assert_eq!(first, second);
        assert!(first["answer"].as_str().unwrap().contains("tCO2e"));
    }

    #[tokio::test]
    async fn test_query_missing_text_is_default_summary() {
        let response = create_test_app()
            .oneshot(post_json("/api/query", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert!(body["answer"].as_str().unwrap().starts_with("Tracking **6 projects**"));
        assert!(body.get("suggestedActions").is_none());
    }

    // =========================================================================
    // Section 3: Inline Records
    // =========================================================================

    #[tokio::test]
    async fn test_inline_query() {
        let request = json!({
            "query": "compost projects over 50 acres",
            "projects": [{
                "id": "x-1",
                "farmName": "Inline Farm",
                "location": { "state": "OR", "county": "Lane", "coordinates": { "lat": 44.0, "lng": -123.0 } },
                "practices": ["compost_application"],
                "acreage": 90,
                "grantAmount": 12000,
                "grantDate": "2024-02-01",
                "fundSource": "campaign_funds",
                "cometEstimate": { "low": 5, "high": 9 },
                "availability": "available",
                "stage": "implementing"
            }],
            "funders": []
        });

        let response = create_test_app()
            .oneshot(post_json("/api/query/inline", request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["type"], "list");
        assert!(body["answer"].as_str().unwrap().contains("- **Inline Farm** (Lane, OR): 90 acres"));
    }

    #[tokio::test]
    async fn test_inline_query_rejects_invalid_record() {
        let request = json!({
            "query": "carbon",
            "projects": [{
                "id": "bad",
                "farmName": "Bad Farm",
                "location": { "state": "OR", "county": "Lane", "coordinates": { "lat": 0, "lng": 0 } },
                "practices": ["mulching"],
                "acreage": 10,
                "grantAmount": 100,
                "grantDate": "2024-02-01",
                "fundSource": "campaign_funds",
                "cometEstimate": { "low": 50, "high": 5 },
                "availability": "private",
                "stage": "granted"
            }]
        });

        let response = create_test_app()
            .oneshot(post_json("/api/query/inline", request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("bad"));
    }

    // =========================================================================
    // Section 4: Intent Inspection
    // =========================================================================

    #[tokio::test]
    async fn test_intent_endpoint() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/intent?q=carbon%20impact%20in%20Colorado")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["intent"], "state-breakdown");
        assert_eq!(body["normalized"], "carbon impact in colorado");
    }
}
