use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for team rosters
#[async_trait]
pub trait TeamService: Send + Sync {
    /// Adds a player to a team for a season and returns the server response
    async fn add_team_player(
        &self,
        team_id: u64,
        player_id: u64,
        season_id: u64,
    ) -> Result<Value, AppError>;

    /// Checks whether a player plays for a team in a season
    ///
    /// Error payloads from the server count as "not a member"; only transport
    /// failures are returned as errors.
    async fn is_player_in_team(
        &self,
        player_id: u64,
        team_id: u64,
        season_id: u64,
    ) -> Result<bool, AppError>;
}
