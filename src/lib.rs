pub mod api;
pub mod models;
pub mod stats;

pub use api::{
    ApiError, FailurePolicy, GamesApi, PredictionsApi, Session, Transport, UserStatsReport,
    UsersApi,
};
pub use models::*;
pub use stats::{PerformanceSummary, ResultFilter, StreakSummary};

/// All three resource clients over one shared transport
#[derive(Debug, Clone)]
pub struct PickemClient {
    pub games: GamesApi,
    pub users: UsersApi,
    pub predictions: PredictionsApi,
}

impl PickemClient {
    pub fn new(transport: Transport) -> Self {
        Self {
            games: GamesApi::new(transport.clone()),
            users: UsersApi::new(transport.clone()),
            predictions: PredictionsApi::new(transport),
        }
    }

    /// Client against the address in `PICKEM_API_URL` (or localhost)
    pub fn from_env() -> Self {
        Self::new(Transport::from_env())
    }
}

/// Everything a dashboard surface displays after one combined fetch
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub user: User,
    pub recent_games: Vec<Game>,
    pub performance: PerformanceSummary,
    pub streaks: StreakSummary,
}

/// Fetch the session's user and the game list concurrently and derive the
/// display aggregates
///
/// All-or-nothing: if either request fails the whole fetch fails and the
/// caller falls back to its empty view-state. No partial-success path, no
/// retry.
pub async fn fetch_dashboard(
    client: &PickemClient,
    session: &Session,
) -> Result<DashboardData, ApiError> {
    let (user, recent_games) =
        tokio::try_join!(client.users.fetch_current(session), client.games.fetch_all())?;

    let performance = stats::performance(&user.predictions);
    let streaks = stats::win_streaks(&user.predictions);

    Ok(DashboardData {
        user,
        recent_games,
        performance,
        streaks,
    })
}
