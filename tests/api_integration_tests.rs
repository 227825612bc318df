// API Integration Tests
//
// Purpose: Exercise every route of the HTTP shell in-process
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use air_quality_checker::create_router;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: Read the full response body as text
    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        serde_json::from_str(&body_text(response).await).expect("Failed to parse JSON")
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: JSON API
    // =========================================================================

    #[tokio::test]
    async fn test_list_standards() {
        let response = create_router()
            .oneshot(Request::builder().uri("/api/standards").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["pollutant"], "CO2");
        assert_eq!(rows[0]["value"], 50.0);
        assert_eq!(rows[3]["pollutant"], "Dust");
        assert_eq!(rows[3]["value"], 30.0);
    }

    #[tokio::test]
    async fn test_evaluate_poor() {
        let response = create_router()
            .oneshot(post_json(
                "/api/evaluate",
                r#"{"CO2": "70", "NO2": "55", "SO2": "30", "Dust": "20"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["summary"], "Poor");
        assert_eq!(body["recommendation"], "Limit time outdoors and use air purifiers.");

        let analysis = body["analysis"].as_array().unwrap();
        assert_eq!(analysis.len(), 4);
        assert_eq!(analysis[0]["pollutant"], "CO2");
        assert_eq!(analysis[0]["level"], "high");
        assert_eq!(analysis[0]["message"], "Exceedance of 20.00 mg/m3");
        assert_eq!(analysis[3]["level"], "normal");
    }

    #[tokio::test]
    async fn test_evaluate_accepts_numbers_and_missing_keys() {
        let response = create_router()
            .oneshot(post_json("/api/evaluate", r#"{"CO2": 55, "NO2": null}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["analysis"][0]["level"], "borderline");
        assert_eq!(body["analysis"][1]["actual_value"], 0.0);
        assert_eq!(body["summary"], "Good");
    }

    #[tokio::test]
    async fn test_evaluate_rejects_malformed_json() {
        let response = create_router()
            .oneshot(post_json("/api/evaluate", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert!(body["error"].is_string());
    }

    // =========================================================================
    // Section 3: Form page
    // =========================================================================

    #[tokio::test]
    async fn test_form_page_lists_inputs_in_order() {
        let response = create_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Air Quality Monitoring"));
        assert!(html.contains("Compare"));
        assert!(!html.contains("Results:"));

        let positions: Vec<usize> = ["name=\"CO2\"", "name=\"NO2\"", "name=\"SO2\"", "name=\"Dust\""]
            .iter()
            .map(|needle| html.find(needle).expect("missing input"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_form_submission_renders_results() {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("CO2=55&NO2=30&SO2=abc&Dust="))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Results:"));
        assert!(html.contains("Minor exceedance (entered: 55)"));
        assert!(html.contains("class=\"borderline\""));
        assert!(html.contains("Overall air condition:</strong> Good"));
        assert!(html.contains("No action required."));
        // Entered values are echoed back into the form
        assert!(html.contains("value=\"55\""));
        assert!(html.contains("value=\"abc\""));
    }
}
