//! HTTP adapter tests against a mock upstream
//!
//! Covers the existence oracle status handling and directory payload
//! validation.

use poketeams_api::domain::oracle::{Existence, ExistenceOracle};
use poketeams_api::domain::upstream::{DirectorySource, UpstreamError};
use poketeams_api::infrastructure::directory::HttpDirectorySource;
use poketeams_api::infrastructure::oracle::HttpExistenceOracle;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn oracle_treats_only_200_as_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 25 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/26"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let oracle = HttpExistenceOracle::pokemon(reqwest::Client::new(), server.uri());

    assert_eq!(oracle.check(25).await, Existence::Present);
    assert!(oracle.exists(25).await);
    assert_eq!(oracle.check(26).await, Existence::Absent, "2xx other than 200");
    assert_eq!(oracle.check(9999).await, Existence::Absent, "unmatched is 404");
}

#[tokio::test]
async fn oracle_server_error_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trainers/5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let oracle = HttpExistenceOracle::trainers(reqwest::Client::new(), server.uri());

    assert_eq!(oracle.check(5).await, Existence::Absent);
    assert!(!oracle.exists(5).await);
}

#[tokio::test]
async fn oracle_unreachable_is_reported_and_fails_closed() {
    // Nothing listens on the discard port
    let oracle = HttpExistenceOracle::pokemon(reqwest::Client::new(), "http://127.0.0.1:9");

    assert_eq!(oracle.check(1).await, Existence::Unreachable);
    assert!(!oracle.exists(1).await);
}

#[tokio::test]
async fn directory_source_parses_payloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trainers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "trainers": [{ "id": 5, "nombre": "Ash" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pokemones": [{ "id": 25, "nombre": "Pikachu", "tipos": ["electric"] }]
        })))
        .mount(&server)
        .await;

    let source = HttpDirectorySource::new(
        reqwest::Client::new(),
        format!("{}/trainers", server.uri()),
        format!("{}/pokemon", server.uri()),
    );

    let trainers = source.fetch_trainers().await.unwrap();
    assert_eq!(trainers[0].name, "Ash");

    let pokemon = source.fetch_pokemon().await.unwrap();
    assert_eq!(pokemon[0].types, vec!["electric".to_string()]);
}

#[tokio::test]
async fn directory_source_rejects_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trainers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "entrenadores": [] })))
        .mount(&server)
        .await;

    let source = HttpDirectorySource::new(
        reqwest::Client::new(),
        format!("{}/trainers", server.uri()),
        format!("{}/pokemon", server.uri()),
    );

    let err = source.fetch_trainers().await.unwrap_err();
    assert!(matches!(err, UpstreamError::Format(_)));
}

#[tokio::test]
async fn directory_source_reports_http_failure_as_transport() {
    let server = MockServer::start().await;

    let source = HttpDirectorySource::new(
        reqwest::Client::new(),
        format!("{}/trainers", server.uri()),
        format!("{}/pokemon", server.uri()),
    );

    let err = source.fetch_pokemon().await.unwrap_err();
    assert!(matches!(err, UpstreamError::Transport(_)));
}
