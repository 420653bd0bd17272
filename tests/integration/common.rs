// Common utilities for integration tests

use cald_client::prelude::*;

/// Creates a client from the environment
pub fn create_test_client() -> ApiClient {
    setup_logger();
    ApiClient::new(Config::new()).expect("Failed to create client")
}

/// Creates a client from the environment and logs in
pub async fn create_logged_in_client() -> ApiClient {
    let client = create_test_client();
    client.login().await.expect("Failed to login");
    client
}
