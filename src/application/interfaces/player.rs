use crate::error::AppError;
use crate::model::requests::Record;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for players and their addresses
///
/// Player bodies never carry an `address` field; addresses are managed
/// through the address methods.
#[async_trait]
pub trait PlayerService: Send + Sync {
    /// Creates a player and returns its id
    async fn create_player(&self, player: &Record) -> Result<u64, AppError>;

    /// Updates a player and returns the updated data
    async fn update_player(&self, player: &Record, id: u64) -> Result<Value, AppError>;

    /// Gets the addresses of a player
    async fn get_player_address(&self, player_id: u64) -> Result<Value, AppError>;

    /// Adds an address to a player.
    ///
    /// A missing `type` defaults to `permanent residence`.
    async fn add_player_address(&self, address: &Record, player_id: u64)
    -> Result<Value, AppError>;

    /// Updates an address of a player
    async fn update_player_address(
        &self,
        address: &Record,
        player_id: u64,
        address_id: u64,
    ) -> Result<Value, AppError>;
}
