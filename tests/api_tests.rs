use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use leisure_api::{create_router, services::Catalog, AppState};

const CATALOG: &str = r#"[
    {"id": "7", "title": "ベランダ菜園のプチ手入れ", "tags": ["indoor", "relax"], "duration": 20},
    {"id": "9", "title": "家族でピクニック", "place": "outdoor", "outcomes": "fun, nature", "duration": 180},
    {"id": "12", "title": "公園でどんぐり探し", "tags": ["outdoor", "nature", "free"], "duration": 60},
    {"id": "13", "title": "図書館で読書", "place": "屋内", "outcomes": "learning", "party": "solo", "duration": 45},
    {"id": "14", "title": "映画館デート", "place": "indoor", "party": "partner", "duration": 120}
]"#;

fn create_test_server_with(catalog_json: &str) -> TestServer {
    let catalog = Catalog::from_json_str(catalog_json).unwrap();
    let app = create_router(AppState::new(catalog).with_rng_seed(Some(11)));
    TestServer::new(app).unwrap()
}

fn create_test_server() -> TestServer {
    create_test_server_with(CATALOG)
}

async fn generate(server: &TestServer, query: Value) -> Value {
    let response = server.post("/api/ideas/generate").json(&query).await;
    response.assert_status_ok();
    response.json()
}

fn ids(response: &Value) -> Vec<String> {
    response["ideas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|idea| idea["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["activities"], 5);
}

#[tokio::test]
async fn test_indoor_single_activity_scenario() {
    let server = create_test_server_with(
        r#"[{"id": "7", "title": "ベランダ菜園のプチ手入れ", "tags": ["indoor", "relax"], "duration": 20}]"#,
    );

    let response = generate(&server, json!({ "mood": "indoor", "limit": 1, "random": false })).await;

    assert_eq!(ids(&response), vec!["7"]);
    assert_eq!(response["hasMore"], false);
    assert_eq!(response["total"], 1);

    let idea = &response["ideas"][0];
    assert_eq!(idea["title"], "ベランダ菜園のプチ手入れ");
    assert_eq!(idea["durationMinutes"], 20);
    assert_eq!(
        idea["tags"],
        json!(["dur:30m", "mood:relax", "outcome:relax", "place:indoor"])
    );
}

#[tokio::test]
async fn test_solo_long_scenario_is_empty() {
    let server = create_test_server();
    let response = generate(&server, json!({ "party": "solo", "conditions": ["90"] })).await;

    assert_eq!(response, json!({ "ideas": [], "hasMore": false, "total": 0 }));
}

#[tokio::test]
async fn test_solo_heuristic_only_applies_to_solo() {
    let server = create_test_server();

    let solo = generate(&server, json!({ "party": "solo", "limit": 50 })).await;
    assert!(!ids(&solo).contains(&"9".to_string()));

    let family = generate(&server, json!({ "party": "family", "limit": 50 })).await;
    assert!(ids(&family).contains(&"9".to_string()));

    let anyone = generate(&server, json!({ "limit": 50 })).await;
    assert!(ids(&anyone).contains(&"9".to_string()));
}

#[tokio::test]
async fn test_conflicting_conditions_leave_pool_unchanged() {
    let server = create_test_server();
    let unconstrained = generate(&server, json!({})).await;
    let conflicting = generate(&server, json!({ "conditions": ["short", "long"] })).await;

    assert_eq!(unconstrained["total"], 5);
    assert_eq!(conflicting["total"], 5);
}

#[tokio::test]
async fn test_exclusion_and_pagination() {
    let server = create_test_server();

    let first = generate(&server, json!({ "limit": 2, "excludeIds": ["7"] })).await;
    assert_eq!(first["total"], 4);
    assert_eq!(first["hasMore"], true);
    assert_eq!(ids(&first).len(), 2);
    assert!(!ids(&first).contains(&"7".to_string()));

    let last = generate(&server, json!({ "limit": 2, "offset": 2, "excludeIds": ["7"] })).await;
    assert_eq!(last["hasMore"], false);
    assert_eq!(ids(&last).len(), 2);

    let mut seen = ids(&first);
    seen.extend(ids(&last));
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 4);
}

#[tokio::test]
async fn test_random_total_matches_deterministic_total() {
    let query = json!({ "mood": "outdoor", "limit": 1 });
    let mut random_query = query.clone();
    random_query["random"] = json!(true);

    let server = create_test_server();
    let fixed = generate(&server, query).await;
    let sampled = generate(&server, random_query).await;

    assert_eq!(fixed["total"], 2);
    assert_eq!(sampled["total"], 2);
    assert_eq!(ids(&sampled).len(), 1);
    assert_eq!(sampled["hasMore"], true);
}

#[tokio::test]
async fn test_outcome_ranks_matches_first() {
    let server = create_test_server();
    let response = generate(&server, json!({ "outcome": "learning" })).await;
    assert_eq!(ids(&response)[0], "13");
}

#[tokio::test]
async fn test_or_tags_filter() {
    let server = create_test_server();
    let response = generate(&server, json!({ "tags": ["無料", "party:partner"] })).await;

    let mut found = ids(&response);
    found.sort();
    assert_eq!(found, vec!["12", "14"]);
}

#[tokio::test]
async fn test_malformed_body_uses_defaults() {
    let server = create_test_server();
    let response = server.post("/api/ideas/generate").text("{not json").await;
    response.assert_status_ok();

    let response: Value = response.json();
    assert_eq!(response["total"], 5);
    assert_eq!(ids(&response).len(), 5);
}

#[tokio::test]
async fn test_limit_is_clamped() {
    let server = create_test_server();
    let response = generate(&server, json!({ "limit": 0 })).await;
    assert_eq!(ids(&response).len(), 1);
    assert_eq!(response["hasMore"], true);
}

#[tokio::test]
async fn test_get_idea_by_id() {
    let server = create_test_server();
    let response = server.get("/api/ideas/13").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["title"], "図書館で読書");
    assert_eq!(
        body["tags"],
        json!(["cat:study", "dur:45m", "outcome:learning", "party:solo", "place:indoor"])
    );
}

#[tokio::test]
async fn test_get_unknown_idea_is_not_found() {
    let server = create_test_server();
    let response = server.get("/api/ideas/404").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn test_list_tags() {
    let server = create_test_server();
    let response = server.get("/api/tags").await;
    response.assert_status_ok();

    let tags: Vec<Value> = response.json();
    assert!(tags.contains(&json!({ "tag": "place:indoor", "namespace": "place", "label": "屋内" })));
    assert!(tags.contains(&json!({ "tag": "kids:ng", "namespace": "kids", "label": null })));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-me"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), "trace-me");
}
