/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_ADDRESS_TYPE;
use crate::error::{AppError, CaldResult};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A player or address record, sent to the server as form fields
pub type Record = Map<String, Value>;

/// Field/value pairs narrowing a list query, passed through verbatim
pub type Filter = Map<String, Value>;

/// Body of `POST /user/login`
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest<'a> {
    /// Account login
    pub login: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Body of `POST /user`
#[derive(Clone, Serialize, Deserialize)]
pub struct NewUserRequest<'a> {
    /// Contact email of the new account
    pub email: &'a str,
    /// Password of the new account
    pub password: &'a str,
    /// Login of the new account
    pub login: &'a str,
}

/// Body of `POST /team/{team_id}/player/{player_id}`
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct SeasonAssignment {
    /// Season the player joins the team for
    pub season_id: u64,
}

/// Parameters of `GET /list/{resource}`
///
/// Every field is optional; only the ones that are set reach the server.
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ListQuery {
    /// Field/value filter (sent JSON encoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    /// Ask the server to expand related records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend: Option<bool>,
    /// Maximum number of records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of records to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ListQuery {
    /// Creates an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the whole filter
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Adds one field to the filter
    #[must_use]
    pub fn with_where(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filter
            .get_or_insert_with(Filter::new)
            .insert(field.to_string(), value.into());
        self
    }

    /// Sets the extend flag
    #[must_use]
    pub fn with_extend(mut self, extend: bool) -> Self {
        self.extend = Some(extend);
        self
    }

    /// Sets the limit
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the offset
    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns true when no parameter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filter.is_none() && self.extend.is_none() && self.limit.is_none() && self.offset.is_none()
    }

    /// Renders the query string pairs, skipping unset parameters
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = &self.filter {
            pairs.push(("filter", Value::Object(filter.clone()).to_string()));
        }
        if let Some(extend) = self.extend {
            pairs.push(("extend", extend.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

/// Copies a player record without its `address` field.
///
/// Addresses live under `/player/{id}/address` and are never sent with the
/// player itself.
#[must_use]
pub fn player_body(player: &Record) -> Record {
    let mut body = player.clone();
    body.remove("address");
    body
}

/// Copies an address record, filling in `type` when it is missing
#[must_use]
pub fn address_body(address: &Record) -> Record {
    let mut body = address.clone();
    body.entry("type")
        .or_insert_with(|| Value::String(DEFAULT_ADDRESS_TYPE.to_string()));
    body
}

/// Flattens a request body into form fields.
///
/// The service reads `application/x-www-form-urlencoded` bodies. Strings are
/// sent as they are, numbers and booleans in their JSON spelling, `null` as an
/// empty value, and nested objects or arrays as JSON text.
pub fn form_fields<B: Serialize>(body: &B) -> CaldResult<Vec<(String, String)>> {
    match serde_json::to_value(body)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect()),
        other => Err(AppError::InvalidInput(format!(
            "request body must be an object, got {other}"
        ))),
    }
}
