use crate::api::transport::{ApiError, Session, Transport};
use crate::models::{
    BalanceAndPredictions, CreatePredictionRequest, LegacyPredictionRequest, Prediction,
};

/// What a lookup does when the backend fails
///
/// `FallbackToEmpty` reproduces the behavior older consumers rely on: any
/// failure becomes an empty history instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    Propagate,
    FallbackToEmpty,
}

/// Typed operations on the `/predictions` resource
#[derive(Debug, Clone)]
pub struct PredictionsApi {
    transport: Transport,
}

impl PredictionsApi {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Submit a prediction and receive the user's updated projection
    ///
    /// Rejects non-positive amounts and empty picks locally, before any
    /// request is issued. Whether `pick` names one of the game's two teams
    /// is left to the backend.
    pub async fn submit(
        &self,
        request: &CreatePredictionRequest,
    ) -> Result<BalanceAndPredictions, ApiError> {
        if request.amount <= 0.0 {
            return Err(ApiError::Validation {
                field: "amount",
                message: format!("must be positive, got {}", request.amount),
            });
        }
        if request.pick.trim().is_empty() {
            return Err(ApiError::Validation {
                field: "pick",
                message: "no team selected".to_string(),
            });
        }

        self.transport.post("/predictions", request).await
    }

    /// Submit a request still in the legacy shape
    ///
    /// Adapted at this boundary and pushed through the same validation as
    /// canonical submissions, so a legacy caller that omitted the amount is
    /// rejected locally rather than round-tripped.
    pub async fn submit_legacy(
        &self,
        request: LegacyPredictionRequest,
        session: &Session,
    ) -> Result<BalanceAndPredictions, ApiError> {
        let request = request.into_request(session.user_id.clone());
        self.submit(&request).await
    }

    /// The session user's full prediction history, oldest first
    pub async fn fetch_for_user(&self, session: &Session) -> Result<Vec<Prediction>, ApiError> {
        self.transport
            .get(&format!("/users/{}/predictions", session.user_id))
            .await
    }

    /// The session user's prediction on one game; 404 if they have none
    pub async fn fetch_for_game(
        &self,
        game_id: &str,
        session: &Session,
    ) -> Result<Prediction, ApiError> {
        self.transport
            .get(&format!("/users/{}/predictions/{game_id}", session.user_id))
            .await
    }

    /// Per-game history in list form
    ///
    /// With `FailurePolicy::FallbackToEmpty` every failure (including a
    /// plain 404 for "no prediction yet") becomes `Ok(vec![])`.
    pub async fn fetch_game_history(
        &self,
        game_id: &str,
        session: &Session,
        policy: FailurePolicy,
    ) -> Result<Vec<Prediction>, ApiError> {
        match self.fetch_for_game(game_id, session).await {
            Ok(prediction) => Ok(vec![prediction]),
            Err(_) if policy == FailurePolicy::FallbackToEmpty => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }
}
