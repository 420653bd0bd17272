/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::utils::deserialize_id;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `POST /user/login`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// Token object issued by the server
    pub token: AuthToken,
}

/// Token object nested in the login response
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AuthToken {
    /// Opaque token sent back in the `token` header
    pub token: String,
    /// Any further fields the server attaches (validity, user id, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `POST /user`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct UserCreated {
    /// Identifier of the new user
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,
    /// Human readable outcome
    #[serde(default)]
    pub info: Option<String>,
    /// Whether a confirmation mail was sent
    #[serde(default)]
    pub mail_send: Option<bool>,
    /// Status string, `OK` on success
    #[serde(default)]
    pub status: Option<String>,
}
