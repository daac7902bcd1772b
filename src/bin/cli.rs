use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pickem_client::{
    fetch_dashboard, stats, CreatePredictionRequest, Game, GameStatus, PickemClient, ResultFilter,
    Session, Transport,
};

#[derive(Parser)]
#[command(name = "pickem", about = "Client for the sports prediction backend")]
struct Cli {
    /// Backend base address; defaults to PICKEM_API_URL or localhost
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List games, optionally filtered by status
    Games {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },
    /// Combined dashboard fetch: balance, performance, streaks
    Dashboard {
        #[arg(long)]
        user: String,
    },
    /// Prediction history with per-result counts
    Profile {
        #[arg(long)]
        user: String,
    },
    /// Submit a prediction
    Predict {
        #[arg(long)]
        game: String,
        #[arg(long)]
        pick: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        user: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Scheduled,
    Live,
    Final,
}

impl From<StatusArg> for GameStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Scheduled => GameStatus::Scheduled,
            StatusArg::Live => GameStatus::InProgress,
            StatusArg::Final => GameStatus::Final,
        }
    }
}

fn format_game(game: &Game) -> String {
    let matchup = format!(
        "{} @ {}",
        game.away_team.abbreviation, game.home_team.abbreviation
    );
    match game.status {
        GameStatus::Scheduled => {
            let start = game
                .start_time
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "TBD".to_string());
            format!("{matchup} | scheduled {start}")
        }
        GameStatus::InProgress => format!(
            "{matchup} | {} {} | {}-{}",
            game.period.as_deref().unwrap_or("?"),
            game.clock.as_deref().unwrap_or("?"),
            game.away_team.score.unwrap_or(0),
            game.home_team.score.unwrap_or(0),
        ),
        GameStatus::Final => format!(
            "{matchup} | final {}-{} | winner: {}",
            game.away_team.score.unwrap_or(0),
            game.home_team.score.unwrap_or(0),
            game.winner.as_deref().unwrap_or("?"),
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let transport = match cli.base_url {
        Some(base_url) => Transport::new(base_url),
        None => Transport::from_env(),
    };
    let client = PickemClient::new(transport);

    match cli.command {
        Command::Games { status } => {
            let games = match status {
                Some(status) => client.games.fetch_by_status(status.into()).await,
                None => client.games.fetch_all().await,
            }
            .context("Failed to fetch games")?;

            if games.is_empty() {
                println!("No games found.");
            } else {
                for (i, game) in games.iter().enumerate() {
                    println!("{}. {}", i + 1, format_game(game));
                }
            }
        }
        Command::Dashboard { user } => {
            let session = Session::new(user);
            let data = fetch_dashboard(&client, &session)
                .await
                .context("Failed to fetch dashboard data")?;

            println!("{} (${:.2})\n", data.user.username, data.user.balance);
            println!(
                "Predictions: {} ({} won, {} lost, {} pending)",
                data.performance.total_predictions,
                data.performance.wins,
                data.performance.losses,
                data.performance.pending
            );
            println!("Win rate: {:.1}%", data.performance.win_rate);
            println!("Total earnings: ${:.2}", data.performance.total_earnings);
            println!("Average bet: ${:.2}", data.performance.avg_bet_amount);
            println!(
                "Streak: {} (best {})",
                data.streaks.current, data.streaks.best
            );
            println!("\nGames: {}", data.recent_games.len());
        }
        Command::Profile { user } => {
            let session = Session::new(user);
            let (report, predictions) = tokio::try_join!(
                client.users.fetch_stats(&session.user_id),
                client.predictions.fetch_for_user(&session)
            )
            .context("Failed to fetch profile data")?;

            println!("{} <{}>", report.username, report.email);
            println!(
                "{}/{} correct ({:.1}%), {} points\n",
                report.correct_predictions,
                report.total_predictions,
                report.success_rate,
                report.total_points
            );

            println!(
                "History: {} all | {} pending | {} won | {} lost",
                stats::count_matching(&predictions, ResultFilter::All),
                stats::count_matching(&predictions, ResultFilter::Pending),
                stats::count_matching(&predictions, ResultFilter::Win),
                stats::count_matching(&predictions, ResultFilter::Loss)
            );
            for prediction in &predictions {
                let payout = prediction
                    .payout
                    .map(|p| format!("{p:+.2}"))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {} | {} for ${:.2} | {:?} | {}",
                    prediction.game_id, prediction.pick, prediction.amount, prediction.result, payout
                );
            }
        }
        Command::Predict {
            game,
            pick,
            amount,
            user,
        } => {
            let request = CreatePredictionRequest {
                game_id: game,
                pick,
                amount,
                user_id: user,
            };
            let updated = client
                .predictions
                .submit(&request)
                .await
                .context("Failed to submit prediction")?;

            println!("Prediction accepted.");
            println!("New balance: ${:.2}", updated.balance);
            println!(
                "{} predictions ({} pending)",
                updated.predictions.len(),
                updated.stats.pending
            );
        }
    }

    Ok(())
}
