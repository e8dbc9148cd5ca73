use std::path::PathBuf;
use rocket::http::{Header, Status};
use rocket::local::blocking::Client;
use serde_json::Value;
use shared::{AppConfig, ErrorResponse};
use uuid::Uuid;
use crate::build_rocket;

fn static_fixture() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("uplix_test_{}", Uuid::new_v4()));
    std::fs::create_dir_all(dir.join("assets")).unwrap();
    std::fs::write(dir.join("index.html"), "<html><body>uplix shell</body></html>").unwrap();
    std::fs::write(dir.join("assets/app.js"), "console.log('uplix');").unwrap();
    dir
}

fn client() -> Client {
    let config = AppConfig::new("https://api.acme.dev")
        .unwrap()
        .with_auth_key("pk_test_123");
    Client::tracked(build_rocket(config, static_fixture())).expect("valid rocket instance")
}

#[test]
fn test_config_endpoint() {
    let client = client();
    let response = client.get("/api/config").dispatch();

    assert_eq!(response.status(), Status::Ok);
    let config: AppConfig = response.into_json().unwrap();
    assert_eq!(config.scoring_api_base_url.as_str(), "https://api.acme.dev/");
    assert_eq!(config.auth_publishable_key.as_deref(), Some("pk_test_123"));
}

#[test]
fn test_health() {
    let client = client();
    let response = client.get("/api/health").dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["status"], "ok");
}

#[test]
fn test_unknown_api_route_is_json_404() {
    let client = client();
    let response = client.get("/api/hackathon/score/abc123").dispatch();

    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_string().unwrap();
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], 404);
    let error: ErrorResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(error.error, "No resource at /api/hackathon/score/abc123.");
}

#[test]
fn test_client_routes_fall_back_to_shell() {
    let client = client();

    for path in ["/", "/waitlist", "/scored-repos/abc123", "/does-not-exist"] {
        let response = client.get(path).dispatch();
        assert_eq!(response.status(), Status::Ok, "{}", path);
        assert!(response.into_string().unwrap().contains("uplix shell"));
    }
}

#[test]
fn test_static_assets_are_served() {
    let client = client();
    let response = client.get("/assets/app.js").dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().unwrap(), "console.log('uplix');");
}

#[test]
fn test_cors_for_local_frontend() {
    let client = client();

    let response = client.get("/api/config")
        .header(Header::new("Origin", "http://localhost:8080"))
        .dispatch();
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("http://localhost:8080")
    );

    let response = client.get("/api/config")
        .header(Header::new("Origin", "https://evil.example"))
        .dispatch();
    assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), None);

    let response = client.options("/api/config").dispatch();
    assert_eq!(response.status(), Status::Ok);
}
