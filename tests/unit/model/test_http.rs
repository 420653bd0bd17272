use assert_json_diff::assert_json_eq;
use cald_client::config::Config;
use cald_client::model::http::{HttpClient, build_url};
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn get_without_token_sends_no_token_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/user/me")
        .match_header("token", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "not logged in"}"#)
        .expect(1)
        .create_async()
        .await;

    let http = HttpClient::new(Config::with_base_url(&server.url())).unwrap();
    let envelope = http.get("/user/me", &[]).await.expect("transport should succeed");

    assert!(envelope.is_error());
    mock.assert_async().await;
}

#[tokio::test]
async fn token_is_attached_once_set() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/user/me")
        .match_header("token", "secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"login": "agent"}"#)
        .expect(2)
        .create_async()
        .await;

    let http = HttpClient::new(Config::with_base_url(&server.url())).unwrap();
    http.auth().set_token(Some("secret-token".to_string())).await;

    for _ in 0..2 {
        let envelope = http.get("/user/me", &[]).await.unwrap();
        assert_json_eq!(envelope.into_value(), json!({"login": "agent"}));
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_body_yields_parse_error_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/player/1/address")
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create_async()
        .await;

    let http = HttpClient::new(Config::with_base_url(&server.url())).unwrap();
    let envelope = http
        .get("/player/1/address", &[])
        .await
        .expect("parse failures are not raised");

    assert_json_eq!(
        envelope.into_value(),
        json!({"error": "unable to parse json", "text": "Internal Server Error"})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn post_sends_form_body_and_query_is_passed_through() {
    let mut server = Server::new_async().await;
    let post_mock = server
        .mock("POST", "/team/1/player/2")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::Exact("season_id=3".to_string()))
        .with_body(r#"{"status": "OK"}"#)
        .create_async()
        .await;
    let get_mock = server
        .mock("GET", "/list/team")
        .match_query(Matcher::UrlEncoded("limit".into(), "5".into()))
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let http = HttpClient::new(Config::with_base_url(&server.url())).unwrap();
    let posted = http
        .post("/team/1/player/2", &json!({"season_id": 3}))
        .await
        .unwrap();
    assert!(!posted.is_error());

    let listed = http
        .get("/list/team", &[("limit", "5".to_string())])
        .await
        .unwrap();
    assert_json_eq!(listed.into_value(), json!({"data": []}));

    post_mock.assert_async().await;
    get_mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // nothing listens on port 9 of localhost in the test environment
    let http = HttpClient::new(Config::with_base_url("http://127.0.0.1:9")).unwrap();
    let err = http.get("/user/me", &[]).await.unwrap_err();
    assert!(matches!(err, cald_client::error::AppError::Network(_)));
}

#[test]
fn build_url_joins_with_a_single_slash() {
    assert_eq!(build_url("http://cald.test", "/user/login"), "http://cald.test/user/login");
    assert_eq!(build_url("http://cald.test/", "/user/login"), "http://cald.test/user/login");
    assert_eq!(build_url("http://cald.test//", "user/me"), "http://cald.test/user/me");
}
