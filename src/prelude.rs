/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # CALD Client Prelude
//!
//! Brings the client, its service traits and the common models into scope.
//!
//! ## Usage
//!
//! ```rust
//! use cald_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8080");
//! let client = ApiClient::new(config);
//! assert!(client.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the CALD API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, CaldResult};

// ============================================================================
// CLIENT, SESSION AND SERVICES
// ============================================================================

/// Client implementing every service
pub use crate::application::client::ApiClient;

/// Session and login handling
pub use crate::application::auth::{Auth, Session};

/// Service interfaces
pub use crate::application::interfaces::{
    list::ListService, player::PlayerService, season::SeasonService, team::TeamService,
    user::UserService,
};

// ============================================================================
// MODELS
// ============================================================================

/// Response envelope
pub use crate::model::envelope::Envelope;

/// Request models
pub use crate::model::requests::{Filter, ListQuery, Record};

/// Response models
pub use crate::model::responses::{AuthToken, LoginResponse, UserCreated};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use serde_json::{Value, json};
pub use tracing::{debug, error, info, warn};
