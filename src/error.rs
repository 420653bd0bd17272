/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::envelope::Envelope;
use std::fmt;

/// Result alias used across the crate
pub type CaldResult<T> = Result<T, AppError>;

/// Errors returned by the CALD client
#[derive(Debug)]
pub enum AppError {
    /// Transport failure: the server could not be reached or the request timed out
    Network(reqwest::Error),
    /// A request body could not be serialized
    Json(serde_json::Error),
    /// The server answered with an `error` payload.
    ///
    /// Bodies that are not valid JSON end up here too, carrying the
    /// synthesized `{"error": "unable to parse json", "text": ...}` payload.
    Api(Envelope),
    /// A success payload did not contain an expected field
    Deserialization(String),
    /// Caller input rejected before any request was made
    InvalidInput(String),
}

impl AppError {
    /// Returns the server error payload, if this is an API error
    #[must_use]
    pub fn payload(&self) -> Option<&Envelope> {
        match self {
            AppError::Api(envelope) => Some(envelope),
            _ => None,
        }
    }

    /// Returns true when the server (not the transport) reported the failure
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        matches!(self, AppError::Api(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Api(envelope) => match envelope.error_message() {
                Some(message) => write!(f, "api error: {message}"),
                None => write!(f, "api error: {envelope}"),
            },
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
