use crate::error::AppError;
use crate::model::responses::{LoginResponse, UserCreated};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for user accounts and login
#[async_trait]
pub trait UserService: Send + Sync {
    /// Logs in and stores the session token
    ///
    /// # Arguments
    /// * `user` - Account login
    /// * `password` - Account password
    ///
    /// # Returns
    /// * The token object on success, `AppError::Api` with the server payload
    ///   when the credentials are rejected (the token stays unset)
    async fn authorize(&self, user: &str, password: &str) -> Result<LoginResponse, AppError>;

    /// Gets the user the stored token belongs to
    async fn get_current_user(&self) -> Result<Value, AppError>;

    /// Registers a new user account
    async fn create_user(
        &self,
        login: &str,
        password: &str,
        email: &str,
    ) -> Result<UserCreated, AppError>;
}
