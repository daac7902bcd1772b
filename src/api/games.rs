use crate::api::transport::{ApiError, Transport};
use crate::models::{Game, GameStatus};

/// Typed operations on the `/games` resource
#[derive(Debug, Clone)]
pub struct GamesApi {
    transport: Transport,
}

impl GamesApi {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch every game the backend knows about
    pub async fn fetch_all(&self) -> Result<Vec<Game>, ApiError> {
        self.transport.get("/games").await
    }

    /// Fetch a single game; an unknown id surfaces as a 404 client error
    /// (`ApiError::is_not_found`)
    pub async fn fetch_by_id(&self, game_id: &str) -> Result<Game, ApiError> {
        self.transport.get(&format!("/games/{game_id}")).await
    }

    /// Fetch games filtered by status, backend order preserved
    pub async fn fetch_by_status(&self, status: GameStatus) -> Result<Vec<Game>, ApiError> {
        self.transport
            .get(&format!("/games/status/{}", status.as_str()))
            .await
    }

    pub async fn fetch_scheduled(&self) -> Result<Vec<Game>, ApiError> {
        self.fetch_by_status(GameStatus::Scheduled).await
    }

    pub async fn fetch_live(&self) -> Result<Vec<Game>, ApiError> {
        self.fetch_by_status(GameStatus::InProgress).await
    }

    pub async fn fetch_finished(&self) -> Result<Vec<Game>, ApiError> {
        self.fetch_by_status(GameStatus::Final).await
    }
}
