pub mod games;
pub mod predictions;
pub mod transport;
pub mod users;

pub use games::GamesApi;
pub use predictions::{FailurePolicy, PredictionsApi};
pub use transport::{ApiError, Session, Transport};
pub use users::{UserStatsReport, UsersApi};
