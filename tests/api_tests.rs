//! Integration tests for the HTTP API and landing page.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestServer;
use serde_json::{Value, json};

fn film_body() -> Value {
    json!({
        "title": "My Film",
        "filename": "my-film.mp4",
        "size": "10.00MB",
        "type": "video/mp4",
        "uploadedAt": "October 16, 2026 at 3:04 PM"
    })
}

#[tokio::test]
async fn health_is_static_ok() {
    let server = TestServer::new().await;
    let (status, body) = server.json_request("GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn ready_checks_sqlite() {
    let server = TestServer::new().await;
    let (status, body) = server.json_request("GET", "/api/ready", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["checks"]["sqlite"]["ok"], true);
}

#[tokio::test]
async fn create_echoes_fields_with_id() {
    let server = TestServer::new().await;
    let (status, body) = server
        .json_request("POST", "/api/file-metadata", Some(film_body()))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().is_some());
    for field in ["title", "filename", "size", "type", "uploadedAt"] {
        assert_eq!(body[field], film_body()[field], "field {}", field);
    }
}

#[tokio::test]
async fn ids_are_assigned_by_the_server() {
    let server = TestServer::new().await;
    let mut first = film_body();
    first["id"] = json!(500);

    let (_, a) = server.json_request("POST", "/api/file-metadata", Some(first)).await;
    let (_, b) = server
        .json_request("POST", "/api/file-metadata", Some(film_body()))
        .await;

    assert_eq!(a["id"], 1);
    assert_eq!(b["id"], 2);
}

#[tokio::test]
async fn missing_title_defaults_to_empty() {
    let server = TestServer::new().await;
    let mut body = film_body();
    body.as_object_mut().unwrap().remove("title");

    let (status, created) = server.json_request("POST", "/api/file-metadata", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "");

    let uri = format!("/api/file-metadata/{}", created["id"]);
    let (_, fetched) = server.json_request("GET", &uri, None).await;
    assert_eq!(fetched["title"], "");
}

#[tokio::test]
async fn missing_filename_is_a_400() {
    let server = TestServer::new().await;
    let mut body = film_body();
    body.as_object_mut().unwrap().remove("filename");

    let (status, error) = server.json_request("POST", "/api/file-metadata", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["status"], 400);
    let issues = error["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["path"], json!(["filename"]));
    assert_eq!(issues[0]["message"], "Required");

    let (_, all) = server.json_request("GET", "/api/file-metadata", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn wrong_field_type_is_a_400() {
    let server = TestServer::new().await;
    let mut body = film_body();
    body["size"] = json!(10485760);

    let (status, error) = server.json_request("POST", "/api/file-metadata", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["issues"][0]["path"], json!(["size"]));
    assert_eq!(error["issues"][0]["message"], "Expected string, received number");
}

#[tokio::test]
async fn malformed_json_is_a_400() {
    let server = TestServer::new().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/file-metadata")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"filename\": "))
        .unwrap();

    let (status, body) = server.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn missing_content_type_is_a_400() {
    let server = TestServer::new().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/file-metadata")
        .body(Body::from(film_body().to_string()))
        .unwrap();

    let (status, _) = server.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_by_id_round_trips() {
    let server = TestServer::new().await;
    let (_, created) = server
        .json_request("POST", "/api/file-metadata", Some(film_body()))
        .await;

    let uri = format!("/api/file-metadata/{}", created["id"]);
    let (status, fetched) = server.json_request("GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn unknown_id_is_a_404() {
    let server = TestServer::new().await;
    let (status, body) = server.json_request("GET", "/api/file-metadata/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "File metadata not found");
}

#[tokio::test]
async fn non_numeric_id_is_a_400() {
    let server = TestServer::new().await;
    let (status, body) = server
        .json_request("GET", "/api/file-metadata/abc", None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid ID format");
}

#[tokio::test]
async fn list_returns_records_in_creation_order() {
    let server = TestServer::new().await;
    for name in ["a.mp4", "b.mov", "c.avi"] {
        let mut body = film_body();
        body["filename"] = json!(name);
        let (status, _) = server.json_request("POST", "/api/file-metadata", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, all) = server.json_request("GET", "/api/file-metadata", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["filename"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["a.mp4", "b.mov", "c.avi"]);
}

#[tokio::test]
async fn landing_page_is_served() {
    let server = TestServer::new().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, bytes) = server.send_raw(request).await;
    let html = String::from_utf8(bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<section id=\"schedule\">"));
    assert!(html.contains("<footer>"));
}
