/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Login credentials for the CALD API
pub struct Credentials {
    /// Account login
    pub username: String,
    /// Account password, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the CALD REST API, without trailing slash
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the CALD API client
pub struct Config {
    /// Credentials used by `login`
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment.
    ///
    /// A `.env` file in the working directory is loaded first. Recognised
    /// variables are `CALD_BASE_URL`, `CALD_TIMEOUT`, `CALD_USERNAME` and
    /// `CALD_PASSWORD`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("CALD_USERNAME", String::new());
        let password = get_env_or_default("CALD_PASSWORD", String::new());

        if username.is_empty() {
            error!("CALD_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("CALD_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("CALD_BASE_URL", String::from(DEFAULT_BASE_URL))
                    .trim_end_matches('/')
                    .to_string(),
                timeout: get_env_or_default("CALD_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration pointing at `base_url`, without credentials
    ///
    /// Nothing is read from the environment.
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            credentials: Credentials::default(),
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    /// Sets the credentials used by `login`
    #[must_use]
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        self
    }

    /// Returns true when both login and password are configured
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.credentials.username.is_empty() && !self.credentials.password.is_empty()
    }
}
