//! Pro-rata staking reward accrual
//!
//! Rewards accrue linearly per second with no compounding inside the
//! accrual window:
//!
//!   reward(t) = amount * apy_pct * elapsed_seconds / (SECONDS_PER_YEAR * 100)
//!
//! Timelines aggregate every position's accrual at daily granularity.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::position::StakePosition;

/// Seconds in a 365-day year
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Reward accrued by a single position at `at`.
///
/// Zero before the stake start; strictly increasing afterwards for
/// positive effective APY.
pub fn accrued_reward(position: &StakePosition, at: DateTime<Utc>) -> f64 {
    let elapsed_seconds = (at - position.start).num_seconds().max(0) as f64;
    position.amount * position.effective_apy_pct() * elapsed_seconds
        / (SECONDS_PER_YEAR * 100.0)
}

/// Query window for a reward timeline
#[derive(Debug, Clone, Copy)]
pub struct RewardWindow {
    /// First day of the series; defaults to the earliest stake start
    pub start: Option<NaiveDate>,

    /// Last day of the series (inclusive)
    pub end: NaiveDate,
}

impl RewardWindow {
    /// Series from the earliest stake start through `end`
    pub fn through(end: NaiveDate) -> Self {
        Self { start: None, end }
    }

    /// Series over an explicit `[start, end]` range
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end,
        }
    }
}

/// One day of aggregate reward accrual
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardPoint {
    pub date: NaiveDate,

    /// Cumulative reward across all positions active by this day
    /// (non-decreasing)
    pub total_reward_accrued: f64,

    /// Reward earned during this day, floored at zero
    pub daily_reward_delta: f64,
}

/// Daily-granularity reward series across a set of positions
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RewardTimeline {
    pub points: Vec<RewardPoint>,
}

impl RewardTimeline {
    /// Cumulative reward at the end of the series
    pub fn total_reward(&self) -> f64 {
        self.points
            .last()
            .map(|p| p.total_reward_accrued)
            .unwrap_or(0.0)
    }

    /// Reward earned within the series window (excludes accrual before
    /// the first day)
    pub fn window_reward(&self) -> f64 {
        self.points.iter().map(|p| p.daily_reward_delta).sum()
    }
}

/// Midnight UTC on the given day
fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Aggregate reward at `at` across every position already active
fn aggregate_reward(positions: &[StakePosition], at: DateTime<Utc>) -> f64 {
    positions
        .iter()
        .filter(|p| p.start <= at)
        .map(|p| accrued_reward(p, at))
        .sum()
}

/// Build a daily cumulative/incremental reward series over `window`.
///
/// Positions starting after a sample day contribute nothing to it;
/// daily deltas are floored at zero so clock or rounding artifacts can
/// never produce a negative bar.
pub fn reward_timeline(positions: &[StakePosition], window: RewardWindow) -> RewardTimeline {
    if positions.is_empty() {
        return RewardTimeline::default();
    }

    let earliest = positions
        .iter()
        .map(|p| p.start.date_naive())
        .min()
        .unwrap_or(window.end);
    let start = window.start.unwrap_or(earliest);
    if start > window.end {
        return RewardTimeline::default();
    }

    let mut points = Vec::new();
    // Baseline the deltas against the day before the window opens so
    // the first point reports a true daily figure
    let mut previous = aggregate_reward(positions, day_start(start) - Duration::days(1));

    let mut date = start;
    loop {
        let total = aggregate_reward(positions, day_start(date));
        points.push(RewardPoint {
            date,
            total_reward_accrued: total,
            daily_reward_delta: (total - previous).max(0.0),
        });
        previous = total;

        if date >= window.end {
            break;
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    RewardTimeline { points }
}
