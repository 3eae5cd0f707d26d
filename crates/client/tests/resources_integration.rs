//! Typed resource wrappers against a stubbed backend.

use std::sync::Arc;

use lectern_client::ApiClient;
use lectern_common::{HttpRefreshApi, MemoryStore, SessionManager, TokenStore};
use lectern_domain::{AdminPatch, ApiConfig, ListQuery, NewSchool};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "success": true, "data": data, "message": "ok", "error": null })
}

fn school_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "state": "Selangor",
        "city": "Shah Alam",
        "status": "active",
        "students_count": 120,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-06-01T00:00:00Z"
    })
}

fn admin_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Siti",
        "email": "siti@lectern.app",
        "role": "school_manager",
        "school_id": "s1",
        "status": "active",
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-06-01T00:00:00Z"
    })
}

fn client_for(server: &MockServer) -> ApiClient {
    let tokens = Arc::new(TokenStore::new(
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryStore::new()),
        Arc::new(HttpRefreshApi::new(server.uri())),
    ));
    tokens.set_access_token("T1").unwrap();
    ApiClient::builder().config(ApiConfig::new(server.uri())).tokens(tokens).build().unwrap()
}

#[tokio::test]
async fn schools_list_passes_pagination_and_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/schools"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "25"))
        .and(query_param("search", "melawati"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "schools": [school_json("s1", "SK Taman Melawati")],
            "total_count": 1,
            "page": 2,
            "limit": 25
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = ListQuery { search: Some("melawati".to_owned()), ..ListQuery::page(2, 25) };
    let page = client.schools().list(&query).await.unwrap();

    assert_eq!(page.schools.len(), 1);
    assert_eq!(page.schools[0].name, "SK Taman Melawati");
    assert_eq!(page.meta.total_count, 1);
    assert_eq!(page.meta.page, 2);
}

#[tokio::test]
async fn school_create_and_update_roundtrip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/schools"))
        .and(body_json(json!({
            "name": "SK Bukit Damansara",
            "state": "Kuala Lumpur",
            "city": "Kuala Lumpur"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(envelope(school_json("s9", "SK Bukit Damansara"))),
        )
        .mount(&server)
        .await;

    // The patch body must contain only the fields being changed
    Mock::given(method("PATCH"))
        .and(path("/schools/s9"))
        .and(body_json(json!({ "status": "inactive" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(school_json("s9", "SK Bukit Damansara"))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .schools()
        .create(&NewSchool {
            name: "SK Bukit Damansara".to_owned(),
            state: "Kuala Lumpur".to_owned(),
            city: "Kuala Lumpur".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "s9");

    let patch = lectern_domain::SchoolPatch { status: Some("inactive".to_owned()), ..Default::default() };
    client.schools().update("s9", &patch).await.unwrap();
}

#[tokio::test]
async fn admin_get_update_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admins/by_id/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(admin_json("a1"))))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/admins/a1"))
        .and(body_json(json!({ "role": "admin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(admin_json("a1"))))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admins/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let admin = client.admins().get("a1").await.unwrap();
    assert_eq!(admin.email, "siti@lectern.app");

    let patch = AdminPatch { role: Some("admin".to_owned()), ..Default::default() };
    client.admins().update("a1", &patch).await.unwrap();

    client.admins().delete("a1").await.unwrap();
}

#[tokio::test]
async fn student_statistics_decode_backend_field_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/u7/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "user_info": {
                "id": "u7",
                "ic_number": "021113-14-0551",
                "email": null,
                "name": "Aina",
                "avatar_url": null,
                "school_id": "s1",
                "school_name": "SK Taman Melawati",
                "registration_status": "registered",
                "created_at": "2025-01-01T00:00:00Z"
            },
            "reading_statistics": {
                "total_read_books_count": 3,
                "malay_read_books_count": 1,
                "english_read_books_count": 2,
                "total_reading_duration": 7200,
                "last_book_read_timestamp": "2025-07-01T10:00:00Z",
                "language_breakdown": { "ms": 1, "en": 2 }
            }
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stats = client.students().statistics("u7").await.unwrap();

    assert_eq!(stats.student.name, "Aina");
    assert_eq!(stats.reading.total_read_books_count, 3);
    assert_eq!(stats.reading.language_breakdown["en"], 2);
}

#[tokio::test]
async fn leaderboard_page_for_a_school() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/schools/s1/leaderboard"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "leaderboard": [{
                "rank": 1,
                "user_id": "u7",
                "name": "Aina",
                "ic_number": "021113-14-0551",
                "avatar_url": null,
                "total_score": 980,
                "reading_sessions": 41
            }],
            "total_count": 1,
            "page": 1,
            "limit": 20,
            "school_id": "s1",
            "school_name": "SK Taman Melawati"
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let board = client.leaderboard().school("s1", &ListQuery::page(1, 20)).await.unwrap();

    assert_eq!(board.school_name, "SK Taman Melawati");
    assert_eq!(board.leaderboard[0].rank, 1);
    assert_eq!(board.leaderboard[0].total_score, 980);
}

#[tokio::test]
async fn dashboard_stats_fan_out_over_the_listings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/schools"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "schools": [], "total_count": 12, "page": 1, "limit": 1
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "books": [], "total_count": 340, "page": 1, "limit": 1
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "admins": [], "total_count": 7, "page": 1, "limit": 1
        }))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/by_school/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "users": [], "total_students": 480, "total_count": 480, "page": 1, "limit": 1
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stats = client.dashboard().stats("s1").await.unwrap();

    assert_eq!(stats.total_schools, 12);
    assert_eq!(stats.total_books, 340);
    assert_eq!(stats.total_admins, 7);
    assert_eq!(stats.total_students, 480);
}

#[tokio::test]
async fn sign_in_persists_tokens_and_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "siti@lectern.app", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "access_token": "T1",
            "refresh_token": "R1",
            "expires_in": 3600,
            "token_type": "Bearer",
            "user": {
                "id": "a1",
                "school_id": "s1",
                "role": "school_manager",
                "permissions": ["schools.read", "students.read"]
            }
        }))))
        .mount(&server)
        .await;

    let tokens = Arc::new(TokenStore::new(
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryStore::new()),
        Arc::new(HttpRefreshApi::new(server.uri())),
    ));
    let client = ApiClient::builder()
        .config(ApiConfig::new(server.uri()))
        .tokens(tokens.clone())
        .build()
        .unwrap();

    let session = client.auth().sign_in("siti@lectern.app", "hunter2").await.unwrap();
    assert_eq!(session.role, "school_manager");

    assert_eq!(tokens.access_token().as_deref(), Some("T1"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("R1"));
    assert!(tokens.is_authenticated());

    let sessions = SessionManager::new(tokens);
    assert!(sessions.has_permission("schools.read"));
    assert!(!sessions.has_permission("admins.write"));
}

#[tokio::test]
async fn sign_out_clears_credentials_even_when_the_backend_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.tokens().access_token().is_some());

    client.auth().sign_out().await.unwrap();
    assert!(client.tokens().access_token().is_none());
    assert!(!client.tokens().is_authenticated());
}
