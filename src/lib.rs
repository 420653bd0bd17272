/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # CALD Client
//!
//! An async client for the CALD league management REST API: users, players,
//! teams, seasons and player addresses.
//!
//! Every operation maps to exactly one HTTP request. Response bodies are parsed
//! into an [`Envelope`](model::envelope::Envelope); a body carrying an `error`
//! key is surfaced as [`AppError::Api`](error::AppError::Api) so callers get a
//! single `Result` convention for every method.
//!
//! ## Example
//!
//! ```ignore
//! use cald_client::prelude::*;
//!
//! setup_logger();
//! let client = ApiClient::new(Config::new())?;
//! client.authorize("user", "secret").await?;
//!
//! let season_id = client.get_season_id(2018).await?;
//! let players = client
//!     .list("player", &ListQuery::new().with_limit(20))
//!     .await?;
//! ```

/// Application layer: configuration, session, client and service interfaces
pub mod application;
/// Library wide constants
pub mod constants;
/// Error type shared by every operation
pub mod error;
/// Wire models and the HTTP transport
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Re-export of the configuration module at the crate root
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
