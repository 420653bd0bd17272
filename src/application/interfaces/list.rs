use crate::error::AppError;
use crate::model::requests::ListQuery;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the generic `/list/{resource}` endpoint
#[async_trait]
pub trait ListService: Send + Sync {
    /// Lists the records of a resource
    ///
    /// # Arguments
    /// * `resource` - Resource name, e.g. `player`, `team`, `season`
    /// * `query` - Optional filter, extend flag, limit and offset; unset
    ///   fields are not sent
    ///
    /// # Returns
    /// * The `data` array of the response
    async fn list(&self, resource: &str, query: &ListQuery) -> Result<Vec<Value>, AppError>;
}
