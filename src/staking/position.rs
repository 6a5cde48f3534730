//! Stake position records and CSV loading

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::EngineError;

/// APY substituted when a position carries no explicit rate.
///
/// This is the documented data-model default for upstream feeds that
/// omit the rate column; the substitution is logged at load time.
pub const DEFAULT_APY_PCT: f64 = 5.0;

/// An active stake position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakePosition {
    /// Unique position identifier
    pub position_id: u32,

    /// Staked amount
    pub amount: f64,

    /// Annual percentage yield; `None` means the upstream feed omitted
    /// the rate and [`DEFAULT_APY_PCT`] applies
    pub apy_pct: Option<f64>,

    /// Additional bonus yield on top of the APY
    pub bonus_pct: f64,

    /// When the stake became active
    pub start: DateTime<Utc>,
}

impl StakePosition {
    pub fn new(position_id: u32, amount: f64, apy_pct: f64, start: DateTime<Utc>) -> Self {
        Self {
            position_id,
            amount,
            apy_pct: Some(apy_pct),
            bonus_pct: 0.0,
            start,
        }
    }

    /// Position with a bonus yield component
    pub fn with_bonus(
        position_id: u32,
        amount: f64,
        apy_pct: f64,
        bonus_pct: f64,
        start: DateTime<Utc>,
    ) -> Self {
        Self {
            position_id,
            amount,
            apy_pct: Some(apy_pct),
            bonus_pct,
            start,
        }
    }

    /// Effective yield used for accrual: APY (or the documented
    /// default) plus bonus, as a percentage
    pub fn effective_apy_pct(&self) -> f64 {
        self.apy_pct.unwrap_or(DEFAULT_APY_PCT) + self.bonus_pct
    }
}

/// Raw CSV row matching the position export format
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "PositionId")]
    position_id: u32,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "APY")]
    apy_pct: Option<f64>,
    #[serde(rename = "Bonus")]
    bonus_pct: Option<f64>,
    #[serde(rename = "StartDate")]
    start_date: String,
}

impl CsvRow {
    fn to_position(self) -> Result<StakePosition, EngineError> {
        let date = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").map_err(|e| {
            EngineError::invalid(
                "start_date",
                format!("position {}: {} ({})", self.position_id, self.start_date, e),
            )
        })?;
        let start = date.and_time(NaiveTime::MIN).and_utc();

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(EngineError::invalid(
                "amount",
                format!("position {}: must be positive, got {}", self.position_id, self.amount),
            ));
        }

        if self.apy_pct.is_none() {
            log::warn!(
                "position {}: no APY in feed, using default {:.1}%",
                self.position_id,
                DEFAULT_APY_PCT
            );
        }

        Ok(StakePosition {
            position_id: self.position_id,
            amount: self.amount,
            apy_pct: self.apy_pct,
            bonus_pct: self.bonus_pct.unwrap_or(0.0),
            start,
        })
    }
}

/// Load stake positions from a CSV file with columns
/// `PositionId,Amount,APY,Bonus,StartDate` (APY and Bonus may be empty).
pub fn load_positions(path: &Path) -> Result<Vec<StakePosition>, EngineError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut positions = Vec::new();

    for row in reader.deserialize::<CsvRow>() {
        positions.push(row?.to_position()?);
    }

    log::info!("loaded {} stake positions from {}", positions.len(), path.display());
    Ok(positions)
}
