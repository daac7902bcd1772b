use crate::api::transport::{ApiError, Session, Transport};
use crate::models::{
    CreateUserRequest, DeleteUserResponse, UpdateUserRequest, User, UserList, UserSummary,
};
use crate::stats;

/// Per-user report derived from a freshly fetched projection
///
/// All arithmetic comes from the stats module; nothing is recomputed here.
#[derive(Debug, Clone)]
pub struct UserStatsReport {
    pub id: String,
    pub username: String,
    pub email: String,
    pub total_predictions: usize,
    pub correct_predictions: u32,
    pub success_rate: f64,
    pub total_points: u32,
}

/// Typed operations on the `/users` resource
#[derive(Debug, Clone)]
pub struct UsersApi {
    transport: Transport,
}

impl UsersApi {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch the session's user projection
    pub async fn fetch_current(&self, session: &Session) -> Result<User, ApiError> {
        self.fetch(&session.user_id).await
    }

    /// Fetch any user's projection by id
    pub async fn fetch(&self, user_id: &str) -> Result<User, ApiError> {
        self.transport.get(&format!("/users/{user_id}")).await
    }

    pub async fn list(&self) -> Result<UserList, ApiError> {
        self.transport.get("/users").await
    }

    pub async fn create(&self, request: &CreateUserRequest) -> Result<UserSummary, ApiError> {
        self.transport.post("/users", request).await
    }

    pub async fn update(
        &self,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<UserSummary, ApiError> {
        self.transport
            .put(&format!("/users/{user_id}"), request)
            .await
    }

    pub async fn delete(&self, user_id: &str) -> Result<DeleteUserResponse, ApiError> {
        self.transport.delete(&format!("/users/{user_id}")).await
    }

    /// Fetch a user and derive their stats report
    ///
    /// Points are a flat 100 per win.
    pub async fn fetch_stats(&self, user_id: &str) -> Result<UserStatsReport, ApiError> {
        let user = self.fetch(user_id).await?;
        let counts = stats::tally(&user.predictions);

        Ok(UserStatsReport {
            id: user.id,
            username: user.username,
            email: user.email,
            total_predictions: user.predictions.len(),
            correct_predictions: counts.wins,
            success_rate: stats::win_rate(&user.predictions),
            total_points: counts.wins * 100,
        })
    }
}
