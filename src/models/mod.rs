use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
}

impl GameStatus {
    /// Path segment used by the by-status endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::InProgress => "inProgress",
            GameStatus::Final => "final",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement state of a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionResult {
    Win,
    Loss,
    Pending,
}

/// One side of a game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    pub abbreviation: String,
    pub record: String, // e.g. "12-3"
    pub score: Option<u32>,
}

/// Betting line attached to a game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Odds {
    pub spread: String,
    pub favorite: String,
}

/// A game as served by the backend
///
/// `winner` is set only once the game is `Final`; `period` and `clock` are
/// meaningful only while `InProgress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub status: GameStatus,
    pub start_time: Option<DateTime<Utc>>,
    pub period: Option<String>,
    pub clock: Option<String>,
    pub home_team: Team,
    pub away_team: Team,
    pub odds: Option<Odds>,
    pub winner: Option<String>,
}

impl Game {
    pub fn is_live(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// The two legal `pick` values for this game
    pub fn team_abbreviations(&self) -> (&str, &str) {
        (&self.home_team.abbreviation, &self.away_team.abbreviation)
    }
}

/// A user's wager on a game
///
/// Created once via submission; the backend moves `result` from `Pending` to
/// `Win`/`Loss` exactly once and fills `payout` at settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub game_id: String,
    pub user_id: String,
    pub pick: String,
    pub amount: f64,
    pub result: PredictionResult,
    pub payout: Option<f64>,
}

/// Win/loss/pending counts for a user's prediction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub wins: u32,
    pub losses: u32,
    pub pending: u32,
}

impl UserStats {
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.pending
    }
}

/// Full user projection: identity, balance, prediction history (insertion
/// order = creation order) and a stats snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub username: String,
    pub balance: f64,
    pub predictions: Vec<Prediction>,
    pub stats: UserStats,
}

/// Request body for `POST /predictions`
///
/// `amount` must be positive; `pick` is expected to equal one of the game's
/// two team abbreviations (enforced by the backend, not checked here).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePredictionRequest {
    pub game_id: String,
    pub pick: String,
    pub amount: f64,
    pub user_id: String,
}

/// Updated user projection returned after a prediction is accepted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceAndPredictions {
    pub balance: f64,
    pub predictions: Vec<Prediction>,
    pub stats: UserStats,
}

/// User shape returned by the user CRUD endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response body for `GET /users`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserList {
    pub users: Vec<UserSummary>,
    pub total: u64,
}

/// Request body for `POST /users`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
}

/// Request body for `PUT /users/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Response body for `DELETE /users/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    pub message: String,
}

/// Prediction request in the retired wire shape still produced by older
/// callers: `prediction` instead of `pick`, optional amount, no user id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPredictionRequest {
    pub game_id: String,
    pub prediction: String,
    pub confidence: Option<f64>,
    pub amount: Option<f64>,
}

impl LegacyPredictionRequest {
    /// Translate to the canonical request shape
    ///
    /// A missing amount becomes `0.0` and the caller supplies the user id.
    /// `confidence` has no backend counterpart and is dropped.
    pub fn into_request(self, user_id: impl Into<String>) -> CreatePredictionRequest {
        CreatePredictionRequest {
            game_id: self.game_id,
            pick: self.prediction,
            amount: self.amount.unwrap_or(0.0),
            user_id: user_id.into(),
        }
    }
}
