//! Derived statistics over a user's prediction history.
//!
//! Every aggregate a consumer displays (win rate, streaks, earnings, filter
//! counts) is computed here and only here; the endpoint layer and the CLI
//! both go through these functions instead of re-deriving the arithmetic.

use crate::models::{Prediction, PredictionResult, UserStats};

/// Current and best consecutive-win runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakSummary {
    pub current: u32,
    pub best: u32,
}

/// Display-ready aggregate for a dashboard surface
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub total_predictions: usize,
    pub wins: u32,
    pub losses: u32,
    pub pending: u32,
    pub win_rate: f64,
    pub total_earnings: f64,
    pub avg_bet_amount: f64,
}

/// History-tab filter over prediction results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFilter {
    All,
    Pending,
    Win,
    Loss,
}

impl ResultFilter {
    fn matches(&self, result: PredictionResult) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Pending => result == PredictionResult::Pending,
            ResultFilter::Win => result == PredictionResult::Win,
            ResultFilter::Loss => result == PredictionResult::Loss,
        }
    }
}

/// Percentage of settled-or-not predictions that are wins, in `[0, 100]`
///
/// `0.0` for an empty history.
pub fn win_rate(predictions: &[Prediction]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }
    let wins = tally(predictions).wins as f64;
    wins / predictions.len() as f64 * 100.0
}

/// Sum of payouts across the history; an unsettled prediction contributes 0
pub fn total_earnings(predictions: &[Prediction]) -> f64 {
    predictions.iter().map(|p| p.payout.unwrap_or(0.0)).sum()
}

/// Mean wagered amount, `0.0` for an empty history
pub fn average_bet(predictions: &[Prediction]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }
    let staked: f64 = predictions.iter().map(|p| p.amount).sum();
    staked / predictions.len() as f64
}

/// Recount wins/losses/pending from the history itself
///
/// The counts always sum to `predictions.len()`, which is the consistency
/// check applied to server-sent stats snapshots.
pub fn tally(predictions: &[Prediction]) -> UserStats {
    let mut stats = UserStats {
        wins: 0,
        losses: 0,
        pending: 0,
    };
    for prediction in predictions {
        match prediction.result {
            PredictionResult::Win => stats.wins += 1,
            PredictionResult::Loss => stats.losses += 1,
            PredictionResult::Pending => stats.pending += 1,
        }
    }
    stats
}

/// Current and best win streaks, scanning most-recent to oldest
///
/// `current` counts consecutive trailing wins and is 0 as soon as the most
/// recent prediction is anything else. A loss or a pending result breaks a
/// run for both counters.
pub fn win_streaks(predictions: &[Prediction]) -> StreakSummary {
    let mut current = 0u32;
    let mut best = 0u32;
    let mut run = 0u32;
    let mut trailing = true;

    for prediction in predictions.iter().rev() {
        if prediction.result == PredictionResult::Win {
            run += 1;
            best = best.max(run);
            if trailing {
                current = run;
            }
        } else {
            run = 0;
            trailing = false;
        }
    }

    StreakSummary { current, best }
}

/// Number of predictions matching `filter`; `All` matches everything
pub fn count_matching(predictions: &[Prediction], filter: ResultFilter) -> usize {
    predictions
        .iter()
        .filter(|p| filter.matches(p.result))
        .count()
}

/// Predictions matching `filter`, original order preserved
pub fn filter<'a>(predictions: &'a [Prediction], filter: ResultFilter) -> Vec<&'a Prediction> {
    predictions
        .iter()
        .filter(|p| filter.matches(p.result))
        .collect()
}

/// Everything a dashboard shows about a history, in one pass over it
pub fn performance(predictions: &[Prediction]) -> PerformanceSummary {
    let counts = tally(predictions);
    PerformanceSummary {
        total_predictions: predictions.len(),
        wins: counts.wins,
        losses: counts.losses,
        pending: counts.pending,
        win_rate: win_rate(predictions),
        total_earnings: total_earnings(predictions),
        avg_bet_amount: average_bet(predictions),
    }
}
