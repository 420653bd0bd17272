// Helpers shared by the mock server tests

use cald_client::prelude::*;
use mockito::ServerGuard;

/// Creates a client pointing at the mock server
pub fn client_for(server: &ServerGuard) -> ApiClient {
    ApiClient::new(Config::with_base_url(&server.url())).expect("client should build")
}

/// Builds a record from a JSON object literal
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
