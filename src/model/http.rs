/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::CaldResult;
use crate::model::envelope::Envelope;
use crate::model::requests::form_fields;
use reqwest::{Client, Method};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// HTTP transport for the CALD API
///
/// Builds URLs from the configured base URL, attaches the session token when
/// one is held and turns every body into an [`Envelope`]. Status codes are
/// logged but not interpreted: the body alone tells success from failure.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new transport with an anonymous session
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL and timeout
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Transport ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> CaldResult<Self> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Makes a GET request
    ///
    /// # Arguments
    /// * `path` - Endpoint path, e.g. `/user/me`
    /// * `query` - Query string pairs, may be empty
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> CaldResult<Envelope> {
        self.request::<()>(Method::GET, path, query, None).await
    }

    /// Makes a POST request with a form-encoded body
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> CaldResult<Envelope> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Makes a request against the configured base URL
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> CaldResult<Envelope> {
        let session = self.auth.get_session().await;
        let url = build_url(&self.config.rest_api.base_url, path);
        let headers: Vec<(&str, &str)> = session.auth_header().into_iter().collect();

        make_http_request(&self.http_client, method, &url, headers, query, body).await
    }

    /// Gets the current session
    pub async fn get_session(&self) -> Session {
        self.auth.get_session().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Joins the base URL and an endpoint path with exactly one slash
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Makes a single HTTP request and parses the body into an [`Envelope`]
///
/// Exactly one request is sent. A body that is not JSON yields the synthesized
/// parse-error payload; only transport failures are returned as errors.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query string pairs, may be empty
/// * `body` - Optional request body, sent as form fields
///
/// # Example
///
/// ```ignore
/// let envelope = make_http_request(
///     &client,
///     Method::GET,
///     "http://cald.yosarin.net/user/me",
///     vec![("token", "abc")],
///     &[],
///     None::<&()>,
/// ).await?;
/// ```
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, String)],
    body: Option<&B>,
) -> CaldResult<Envelope> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.form(&form_fields(b)?);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let text = response.text().await?;
    Ok(Envelope::from_body(&text))
}
