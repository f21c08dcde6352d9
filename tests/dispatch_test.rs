mod common;

use quiz_assignments::server::dispatch;
use serde_json::json;

#[tokio::test]
async fn dispatch_matches_http_routes() {
    let store = common::create_seeded_store();

    let list = dispatch(&store, "GET", "/.netlify/functions/api/assignments", None).await;
    assert_eq!(list.status, 200);
    assert_eq!(list.body.as_array().map(Vec::len), Some(2));

    let single = dispatch(&store, "get", "/api/assignments/a1", None).await;
    assert_eq!(single.status, 200);
    assert_eq!(single.body["title"], "First");

    let missing = dispatch(&store, "GET", "/assignments/missing", None).await;
    assert_eq!(missing.status, 404);
    assert_eq!(missing.body, json!({"error": "Assignment not found"}));
}

#[tokio::test]
async fn dispatch_submit_returns_detailed_results() {
    let store = common::create_seeded_store();
    let body = r#"{"answers":[{"questionId":1,"selectedOption":"A"},{"questionId":2,"selectedOption":"D"}]}"#;

    let response = dispatch(&store, "POST", "/assignments/a1/submit", Some(body)).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["correctAnswers"], 2);
    assert_eq!(response.body["scorePercent"], 100.0);
    assert_eq!(response.body["detailedResults"].as_array().map(Vec::len), Some(2));
    assert!(response
        .headers()
        .contains(&("Access-Control-Allow-Origin", "*")));
}

#[tokio::test]
async fn dispatch_submit_without_body_is_bad_request() {
    let store = common::create_seeded_store();

    let response = dispatch(&store, "POST", "/assignments/a1/submit", None).await;

    assert_eq!(response.status, 400);
    assert!(response.body["error"].is_string());
}

#[tokio::test]
async fn dispatch_wrong_method_matches_router() {
    let store = common::create_seeded_store();

    for (method, path) in [
        ("POST", "/assignments"),
        ("GET", "/assignments/a1/submit"),
        ("DELETE", "/assignments/a1"),
    ] {
        let response = dispatch(&store, method, path, None).await;
        assert_eq!(response.status, 404, "{method} {path}");
        assert_eq!(response.body, json!({"error": "Not found"}));
    }
}
