use axum::{
    body::Bytes,
    http::{HeaderName, HeaderValue, StatusCode},
};
use axum_test::TestServer;
use serde_json::{json, Value};

use decor_advisor::api::{create_router, AppState};

fn create_test_server() -> TestServer {
    let state = AppState::new();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn room_json() -> Value {
    json!({
        "id": "room-1",
        "image_reference": "rooms/room-1.jpeg",
        "style": "mid-century",
        "dominant_colors": ["#E8DFD0"],
        "size": "medium",
        "room_type": "living",
        "suitable_positions": [],
        "source": "live",
        "analyzed_at": "2024-05-01T12:00:00Z"
    })
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_quiz_questions() {
    let server = create_test_server();
    let response = server.get("/api/v1/quiz/questions").await;
    response.assert_status_ok();

    let questions: Vec<Value> = response.json();
    assert_eq!(questions.len(), 8);
    assert_eq!(questions[0]["id"], 1);
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 6);
    assert_eq!(questions[0]["options"][0]["option_id"], "1a");
}

#[tokio::test]
async fn test_score_all_vintage_answers() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/quiz/score")
        .json(&json!({
            "answers": ["1a", "2a", "3a", "4a", "5a", "6a", "7a", "8a"]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["style"], "vintage");
    assert_eq!(body["profile"]["style_tag"], "vintage");
    assert_eq!(body["tally"][0]["style"], "vintage");
    assert_eq!(body["tally"][0]["count"], 8);
}

#[tokio::test]
async fn test_score_empty_answers_falls_back() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/quiz/score")
        .json(&json!({ "answers": [] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["style"], "minimalist");
}

#[tokio::test]
async fn test_score_wrong_answer_count() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/quiz/score")
        .json(&json!({ "answers": ["1a", "2a"] }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Expected 8 answers"));
}

#[tokio::test]
async fn test_styles() {
    let server = create_test_server();

    let response = server.get("/api/v1/styles").await;
    response.assert_status_ok();
    let profiles: Vec<Value> = response.json();
    assert_eq!(profiles.len(), 6);

    let response = server.get("/api/v1/styles/mid-century").await;
    response.assert_status_ok();
    let profile: Value = response.json();
    assert_eq!(profile["style_tag"], "mid-century");

    let response = server.get("/api/v1/styles/baroque").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_list_and_filter_items() {
    let server = create_test_server();

    let response = server.get("/api/v1/items").await;
    response.assert_status_ok();
    let items: Vec<Value> = response.json();
    assert_eq!(items.len(), 5);

    let response = server
        .get("/api/v1/items")
        .add_query_param("style", "minimalist")
        .await;
    response.assert_status_ok();
    let items: Vec<Value> = response.json();
    let ids: Vec<&str> = items.iter().map(|i| i["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["2", "5"]);

    let response = server
        .get("/api/v1/items")
        .add_query_param("room_type", "bedroom")
        .await;
    response.assert_status_ok();
    let items: Vec<Value> = response.json();
    assert!(!items.is_empty());
    for item in &items {
        let rooms = item["suitable_room_types"].as_array().unwrap();
        assert!(rooms.contains(&json!("bedroom")));
    }
}

#[tokio::test]
async fn test_get_item() {
    let server = create_test_server();

    let response = server.get("/api/v1/items/2").await;
    response.assert_status_ok();
    let item: Value = response.json();
    assert_eq!(item["name"], "Mid-Century Armchair");
    assert_eq!(item["category"], "seating");

    let response = server.get("/api/v1/items/999").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_analyze_room_without_provider_falls_back() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/rooms/analyze")
        .bytes(Bytes::from_static(&[0xFF, 0xD8, 0xFF, 0xE0]))
        .content_type("image/jpeg")
        .await;

    response.assert_status_ok();
    let room: Value = response.json();
    assert_eq!(room["source"], "fallback");
    assert_eq!(room["dominant_colors"].as_array().unwrap().len(), 3);
    assert!(room["image_reference"].as_str().unwrap().ends_with(".jpeg"));
    assert!(room["style"].is_string());
}

#[tokio::test]
async fn test_analyze_room_rejects_non_images() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/rooms/analyze")
        .bytes(Bytes::from_static(b"not a photo"))
        .content_type("text/plain")
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/api/v1/rooms/analyze")
        .bytes(Bytes::new())
        .content_type("image/png")
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_analyze_room_rejects_oversized_upload() {
    let app = create_router(AppState::new().with_max_upload_bytes(16));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/v1/rooms/analyze")
        .bytes(Bytes::from(vec![0u8; 64]))
        .content_type("image/jpeg")
        .await;
    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_recommendation_for_armchair() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "room": room_json(), "item_id": "2" }))
        .await;

    response.assert_status_ok();
    let result: Value = response.json();

    let score = result["match_score"].as_u64().unwrap();
    assert!((55..=95).contains(&score));
    assert!(result["placement_suggestion"].as_str().unwrap().contains("sofa"));

    let alternatives = result["alternatives"].as_array().unwrap();
    assert_eq!(alternatives.len(), 3);
    assert!(alternatives.iter().all(|alt| alt["id"] != "2"));
}

#[tokio::test]
async fn test_recommendation_for_unknown_item() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "room": room_json(), "item_id": "999" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_analyzed_room_feeds_recommendation() {
    let server = create_test_server();

    let room: Value = server
        .post("/api/v1/rooms/analyze")
        .bytes(Bytes::from_static(&[0x89, 0x50, 0x4E, 0x47]))
        .content_type("image/png")
        .await
        .json();

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "room": room, "item_id": "5" }))
        .await;

    response.assert_status_ok();
    let result: Value = response.json();
    assert!(result["placement_suggestion"]
        .as_str()
        .unwrap()
        .contains("conversation area"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("client-id-123"),
        )
        .await;

    assert_eq!(response.header("x-request-id"), "client-id-123");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let server = create_test_server();
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("bad id with spaces"),
        )
        .await;

    let header = response.header("x-request-id");
    let value = header.to_str().unwrap();
    assert_ne!(value, "bad id with spaces");
    assert_eq!(value.len(), 36);
}
