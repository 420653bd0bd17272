/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::interfaces::list::ListService;
use crate::application::interfaces::player::PlayerService;
use crate::application::interfaces::season::SeasonService;
use crate::application::interfaces::team::TeamService;
use crate::application::interfaces::user::UserService;
use crate::constants::{PLAYER_AT_TEAM_RESOURCE, SEASON_NAME_FILTER, SEASON_RESOURCE};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{
    ListQuery, NewUserRequest, Record, SeasonAssignment, address_body, player_body,
};
use crate::model::responses::{LoginResponse, UserCreated};
use crate::model::utils::value_as_id;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the CALD API
///
/// Implements every service interface on top of a single [`HttpClient`]. The
/// session token obtained by [`UserService::authorize`] is kept inside the
/// client and sent with every later request.
pub struct ApiClient {
    http_client: Arc<HttpClient>,
}

impl ApiClient {
    /// Creates a client with an anonymous session; nothing is sent yet
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL and credentials
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Logs in with the credentials from the configuration
    pub async fn login(&self) -> Result<LoginResponse, AppError> {
        self.http_client.auth().login().await
    }

    /// Gets the current session
    pub async fn session(&self) -> Session {
        self.http_client.get_session().await
    }

    /// Restores a token obtained elsewhere
    pub async fn set_token(&self, token: &str) {
        self.http_client
            .auth()
            .set_token(Some(token.to_string()))
            .await;
    }

    /// Drops the stored token
    pub async fn clear_token(&self) {
        self.http_client.auth().clear_token().await;
    }

    /// Gets the underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl UserService for ApiClient {
    async fn authorize(&self, user: &str, password: &str) -> Result<LoginResponse, AppError> {
        self.http_client.auth().authorize(user, password).await
    }

    async fn get_current_user(&self) -> Result<Value, AppError> {
        let envelope = self.http_client.get("/user/me", &[]).await?.into_result()?;
        Ok(envelope.into_value())
    }

    async fn create_user(
        &self,
        login: &str,
        password: &str,
        email: &str,
    ) -> Result<UserCreated, AppError> {
        info!("Creating user {}", login);
        let body = NewUserRequest {
            email,
            password,
            login,
        };
        let envelope = self.http_client.post("/user", &body).await?.into_result()?;
        serde_json::from_value(envelope.into_value())
            .map_err(|e| AppError::Deserialization(format!("user created response: {e}")))
    }
}

#[async_trait]
impl ListService for ApiClient {
    async fn list(&self, resource: &str, query: &ListQuery) -> Result<Vec<Value>, AppError> {
        if resource.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "resource name must not be empty".to_string(),
            ));
        }
        if !resource
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AppError::InvalidInput(format!(
                "invalid resource name: {resource}"
            )));
        }

        let path = format!("/list/{resource}");
        let pairs = query.to_query_pairs();
        debug!("Listing {} with {} parameter(s)", resource, pairs.len());

        let data = self
            .http_client
            .get(&path, &pairs)
            .await?
            .into_result()?
            .take("data")?;

        match data {
            Value::Array(rows) => Ok(rows),
            Value::Null => Ok(Vec::new()),
            other => Err(AppError::Deserialization(format!(
                "expected `data` to be an array, got {other}"
            ))),
        }
    }
}

#[async_trait]
impl PlayerService for ApiClient {
    async fn create_player(&self, player: &Record) -> Result<u64, AppError> {
        let id = self
            .http_client
            .post("/player", &player_body(player))
            .await?
            .into_result()?
            .take("id")?;

        let id = value_as_id(&id)
            .ok_or_else(|| AppError::Deserialization(format!("invalid player id: {id}")))?;
        info!("Player {} created", id);
        Ok(id)
    }

    async fn update_player(&self, player: &Record, id: u64) -> Result<Value, AppError> {
        let envelope = self
            .http_client
            .post(&format!("/player/{id}"), &player_body(player))
            .await?
            .into_result()?;
        info!("Player {} updated", id);
        Ok(envelope.into_payload())
    }

    async fn get_player_address(&self, player_id: u64) -> Result<Value, AppError> {
        let envelope = self
            .http_client
            .get(&format!("/player/{player_id}/address"), &[])
            .await?
            .into_result()?;
        Ok(envelope.into_payload())
    }

    async fn add_player_address(
        &self,
        address: &Record,
        player_id: u64,
    ) -> Result<Value, AppError> {
        let envelope = self
            .http_client
            .post(
                &format!("/player/{player_id}/address"),
                &address_body(address),
            )
            .await?
            .into_result()?;
        info!("Address added to player {}", player_id);
        Ok(envelope.into_payload())
    }

    async fn update_player_address(
        &self,
        address: &Record,
        player_id: u64,
        address_id: u64,
    ) -> Result<Value, AppError> {
        let envelope = self
            .http_client
            .post(
                &format!("/player/{player_id}/address/{address_id}"),
                address,
            )
            .await?
            .into_result()?;
        Ok(envelope.into_payload())
    }
}

#[async_trait]
impl TeamService for ApiClient {
    async fn add_team_player(
        &self,
        team_id: u64,
        player_id: u64,
        season_id: u64,
    ) -> Result<Value, AppError> {
        let envelope = self
            .http_client
            .post(
                &format!("/team/{team_id}/player/{player_id}"),
                &SeasonAssignment { season_id },
            )
            .await?
            .into_result()?;
        info!(
            "Player {} added to team {} for season {}",
            player_id, team_id, season_id
        );
        Ok(envelope.into_value())
    }

    async fn is_player_in_team(
        &self,
        player_id: u64,
        team_id: u64,
        season_id: u64,
    ) -> Result<bool, AppError> {
        let query = ListQuery::new()
            .with_where("player_id", player_id)
            .with_where("team_id", team_id)
            .with_where("season_id", season_id);

        match self.list(PLAYER_AT_TEAM_RESOURCE, &query).await {
            Ok(rows) => Ok(!rows.is_empty()),
            Err(e @ (AppError::Api(_) | AppError::Deserialization(_))) => {
                debug!("Membership lookup failed, treating as empty: {}", e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl SeasonService for ApiClient {
    async fn get_season_id(&self, year: i32) -> Result<Option<u64>, AppError> {
        if year.to_string() != SEASON_NAME_FILTER {
            warn!(
                "Season lookup always filters on name {}, requested year {} is ignored",
                SEASON_NAME_FILTER, year
            );
        }

        let query = ListQuery::new().with_where("name", SEASON_NAME_FILTER);
        let rows = self.list(SEASON_RESOURCE, &query).await?;

        Ok(rows
            .first()
            .and_then(|season| season.get("id"))
            .and_then(value_as_id))
    }
}
