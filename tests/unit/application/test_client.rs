use crate::common::client_for;
use cald_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn list_returns_data_array() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/list/team")
        .match_query(Matcher::Any)
        .with_body(r#"{"data": [{"id": 1, "name": "Kachny"}, {"id": 2, "name": "Poletime"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let teams = client.list("team", &ListQuery::new()).await.unwrap();

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[1]["name"], json!("Poletime"));
    mock.assert_async().await;
}

#[tokio::test]
async fn list_sends_only_given_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/list/player")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "20".into()),
            Matcher::UrlEncoded("offset".into(), "40".into()),
            Matcher::UrlEncoded("filter".into(), r#"{"surname":"Novak"}"#.into()),
        ]))
        .with_body(r#"{"data": []}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ListQuery::new()
        .with_where("surname", "Novak")
        .with_limit(20)
        .with_offset(40);
    let players = client.list("player", &query).await.unwrap();

    assert!(players.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn list_error_payload_is_returned() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/list/nonsense")
        .with_body(r#"{"error": "Unknown resource"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.list("nonsense", &ListQuery::new()).await.unwrap_err();
    assert_eq!(
        err.payload().and_then(|p| p.error_message()).as_deref(),
        Some("Unknown resource")
    );
}

#[tokio::test]
async fn list_rejects_empty_resource_without_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.list("  ", &ListQuery::new()).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn list_rejects_resource_names_that_change_the_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    for resource in ["player/15", "team?limit=1", "season#x", "../user"] {
        let err = client.list(resource, &ListQuery::new()).await.unwrap_err();
        assert!(
            matches!(err, AppError::InvalidInput(_)),
            "{resource} should be rejected"
        );
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn get_current_user_error_is_standardized() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/user/me")
        .with_body(r#"{"error": "Token required"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_current_user().await.unwrap_err();
    assert!(err.is_api_error());
}

#[tokio::test]
async fn create_user_returns_created_record() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/user")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("email".into(), "test@test.cz".into()),
            Matcher::UrlEncoded("password".into(), "sunset2018".into()),
            Matcher::UrlEncoded("login".into(), "agentSunset".into()),
        ]))
        .with_body(r#"{"id": "67", "info": "User created", "mail_send": true, "status": "OK"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let created = client
        .create_user("agentSunset", "sunset2018", "test@test.cz")
        .await
        .unwrap();

    assert_eq!(created.id, 67);
    assert_eq!(created.status.as_deref(), Some("OK"));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_season_id_returns_first_match() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/list/season")
        .match_query(Matcher::UrlEncoded("filter".into(), r#"{"name":"2018"}"#.into()))
        .with_body(r#"{"data": [{"id": "4", "name": "2018"}, {"id": 9, "name": "2018"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_season_id(2018).await.unwrap(), Some(4));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_season_id_filters_on_fixed_name_whatever_the_year() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/list/season")
        .match_query(Matcher::UrlEncoded("filter".into(), r#"{"name":"2018"}"#.into()))
        .with_body(r#"{"data": [{"id": 4}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_season_id(2019).await.unwrap(), Some(4));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_season_id_none_when_no_match() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/list/season")
        .match_query(Matcher::Any)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_season_id(2018).await.unwrap(), None);
}
