use crate::error::AppError;
use async_trait::async_trait;

/// Interface for seasons
#[async_trait]
pub trait SeasonService: Send + Sync {
    /// Looks up the id of a season by name
    ///
    /// # Returns
    /// * `Some(id)` of the first matching season, `None` when nothing matches
    async fn get_season_id(&self, year: i32) -> Result<Option<u64>, AppError>;
}
