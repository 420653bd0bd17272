/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the CALD API
//!
//! The API uses a single opaque token obtained from `POST /user/login`. Once
//! stored in the [`Session`] it is sent as the `token` header on every request.
//! Tokens carry no expiry information, so there is no refresh logic.

use crate::application::config::Config;
use crate::constants::TOKEN_HEADER;
use crate::error::{AppError, CaldResult};
use crate::model::http::{build_url, make_http_request};
use crate::model::requests::LoginRequest;
use crate::model::responses::LoginResponse;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Session state shared by every request
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Base URL of the API
    pub base_url: String,
    /// Token returned by the last successful login
    pub token: Option<String>,
    /// Login the token belongs to, when obtained through `authorize`
    pub login: Option<String>,
    /// When the token was obtained
    pub authorized_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates an anonymous session for `base_url`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            token: None,
            login: None,
            authorized_at: None,
        }
    }

    /// Checks if a token is held
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the authentication header for this session, if any
    #[must_use]
    pub fn auth_header(&self) -> Option<(&'static str, &str)> {
        self.token.as_deref().map(|token| (TOKEN_HEADER, token))
    }
}

/// Authentication manager for the CALD API
///
/// Owns the session and performs login requests.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Session>>,
}

impl Auth {
    /// Creates a new Auth instance with an anonymous session
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `client` - HTTP client used for login requests
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        let session = Session::new(&config.rest_api.base_url);
        Self {
            config,
            client,
            session: Arc::new(RwLock::new(session)),
        }
    }

    /// Returns a snapshot of the current session
    pub async fn get_session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Returns the stored token, if any
    pub async fn token(&self) -> Option<String> {
        self.session.read().await.token.clone()
    }

    /// Logs in with explicit credentials.
    ///
    /// On success the token is stored and attached to every later request. On
    /// an `error` payload the session is left untouched and the payload is
    /// returned as `AppError::Api`.
    ///
    /// # Returns
    /// * `Ok(LoginResponse)` - The token object issued by the server
    /// * `Err(AppError)` - Error payload or transport failure
    pub async fn authorize(&self, user: &str, password: &str) -> CaldResult<LoginResponse> {
        info!("Logging in as {}", user);

        let url = build_url(&self.config.rest_api.base_url, "/user/login");
        let current = self.get_session().await;
        let headers: Vec<(&str, &str)> = current.auth_header().into_iter().collect();
        let body = LoginRequest {
            login: user,
            password,
        };

        let envelope = make_http_request(
            &self.client,
            Method::POST,
            &url,
            headers,
            &[],
            Some(&body),
        )
        .await?;

        if envelope.is_error() {
            warn!("Login rejected for {}: {}", user, envelope);
            return Err(AppError::Api(envelope));
        }

        let response: LoginResponse = serde_json::from_value(envelope.into_value())
            .map_err(|e| AppError::Deserialization(format!("login response: {e}")))?;

        let mut session = self.session.write().await;
        session.token = Some(response.token.token.clone());
        session.login = Some(user.to_string());
        session.authorized_at = Some(Utc::now());

        info!("✓ Login successful for {}", user);
        Ok(response)
    }

    /// Logs in with the credentials from the configuration
    pub async fn login(&self) -> CaldResult<LoginResponse> {
        if !self.config.has_credentials() {
            return Err(AppError::InvalidInput(
                "no credentials configured (CALD_USERNAME / CALD_PASSWORD)".to_string(),
            ));
        }
        let credentials = &self.config.credentials;
        self.authorize(&credentials.username, &credentials.password)
            .await
    }

    /// Replaces the stored token, e.g. with one saved from an earlier run
    pub async fn set_token(&self, token: Option<String>) {
        let mut session = self.session.write().await;
        debug!("Token {}", if token.is_some() { "set" } else { "cleared" });
        session.authorized_at = token.as_ref().map(|_| Utc::now());
        session.login = None;
        session.token = token;
    }

    /// Drops the local token; later requests are sent anonymously
    pub async fn clear_token(&self) {
        self.set_token(None).await;
    }
}
