//! Monthly savings growth projection
//!
//! Simple accrual earns interest on principal and contributions only;
//! compound accrual grows the principal at the configured compounding
//! frequency and treats each monthly contribution as an annuity-due
//! deposit (added at period start, compounding for its remaining
//! duration).

use serde::{Deserialize, Serialize};

use super::params::{InterestType, SavingsParameters};
use crate::error::EngineError;

/// Average days per month used for the presentation averages
const DAYS_PER_MONTH: f64 = 365.0 / 12.0;

/// Balance snapshot at the end of one projection month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-based month number
    pub month_index: u32,

    /// Balance including accrued interest (non-decreasing)
    pub balance: f64,

    /// Interest earned from the start of the projection through this
    /// month
    pub interest_earned_cumulative: f64,
}

/// Complete savings projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsProjection {
    /// One point per month, 1..=duration_months
    pub points: Vec<ProjectionPoint>,

    pub final_value: f64,
    pub total_interest: f64,
    pub total_contributions: f64,

    /// Presentation averages derived from the projected total interest
    /// of the selected accrual type (total / duration days, and x30).
    /// They always reconcile with `total_interest`; they are not
    /// separately audited accrual figures.
    pub average_daily_interest: f64,
    pub average_monthly_interest: f64,
}

impl SavingsProjection {
    fn from_points(points: Vec<ProjectionPoint>, total_contributions: f64) -> Self {
        let final_value = points.last().map(|p| p.balance).unwrap_or(0.0);
        let total_interest = points
            .last()
            .map(|p| p.interest_earned_cumulative)
            .unwrap_or(0.0);

        let duration_days = points.len() as f64 * DAYS_PER_MONTH;
        let average_daily_interest = if duration_days > 0.0 {
            total_interest / duration_days
        } else {
            0.0
        };

        Self {
            points,
            final_value,
            total_interest,
            total_contributions,
            average_daily_interest,
            average_monthly_interest: average_daily_interest * 30.0,
        }
    }
}

/// Project savings growth month by month.
///
/// A non-positive opening balance yields an all-zero projection rather
/// than an error; other domain violations are rejected up front.
pub fn project(params: &SavingsParameters) -> Result<SavingsProjection, EngineError> {
    params.validate()?;

    if params.initial_amount <= 0.0 {
        return Ok(zero_projection(params.duration_months));
    }

    let points = match params.interest_type {
        InterestType::Simple => simple_points(params),
        InterestType::Compound => compound_points(params),
    };

    let total_contributions =
        params.monthly_contribution * params.duration_months as f64;
    Ok(SavingsProjection::from_points(points, total_contributions))
}

/// "Nothing to project": every point is zero
fn zero_projection(duration_months: u32) -> SavingsProjection {
    let points = (1..=duration_months)
        .map(|month_index| ProjectionPoint {
            month_index,
            balance: 0.0,
            interest_earned_cumulative: 0.0,
        })
        .collect();
    SavingsProjection::from_points(points, 0.0)
}

/// Simple accrual: rate/12 per month on the running contribution base,
/// interest tracked separately and never compounded
fn simple_points(params: &SavingsParameters) -> Vec<ProjectionPoint> {
    let monthly_rate = params.annual_rate() / 12.0;
    let mut base = params.initial_amount;
    let mut interest_cumulative = 0.0;
    let mut points = Vec::with_capacity(params.duration_months as usize);

    for month_index in 1..=params.duration_months {
        base += params.monthly_contribution;
        interest_cumulative += base * monthly_rate;

        points.push(ProjectionPoint {
            month_index,
            balance: base + interest_cumulative,
            interest_earned_cumulative: interest_cumulative,
        });
    }

    points
}

/// Compound accrual via the monthly-equivalent growth factor
/// q = (1 + rate/ppy)^(ppy/12); contributions follow the
/// future-value-of-annuity-due closed form
fn compound_points(params: &SavingsParameters) -> Vec<ProjectionPoint> {
    let ppy = params.compounding.periods_per_year() as f64;
    let monthly_growth = (1.0 + params.annual_rate() / ppy).powf(ppy / 12.0);
    let mut points = Vec::with_capacity(params.duration_months as usize);

    for month_index in 1..=params.duration_months {
        let months = month_index as f64;
        let principal_value = params.initial_amount * monthly_growth.powf(months);

        let contribution_value = if monthly_growth > 1.0 {
            params.monthly_contribution
                * monthly_growth
                * (monthly_growth.powf(months) - 1.0)
                / (monthly_growth - 1.0)
        } else {
            // Zero-rate limit of the annuity-due factor
            params.monthly_contribution * months
        };

        let balance = principal_value + contribution_value;
        let deposited =
            params.initial_amount + params.monthly_contribution * months;

        points.push(ProjectionPoint {
            month_index,
            balance,
            interest_earned_cumulative: balance - deposited,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::savings::{CompoundingFrequency, InterestType};
    use approx::assert_relative_eq;

    fn params(
        initial: f64,
        contribution: f64,
        rate_pct: f64,
        months: u32,
        interest_type: InterestType,
        compounding: CompoundingFrequency,
    ) -> SavingsParameters {
        SavingsParameters::new(initial, contribution, rate_pct, months, interest_type, compounding)
    }

    #[test]
    fn test_compound_reduces_to_closed_form_without_contributions() {
        // No contributions, annual compounding: P * (1 + rate)^years
        let p = params(
            10_000.0,
            0.0,
            6.0,
            36,
            InterestType::Compound,
            CompoundingFrequency::Annually,
        );
        let projection = project(&p).unwrap();

        let expected = 10_000.0 * (1.0_f64 + 0.06).powf(3.0);
        assert_relative_eq!(projection.final_value, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_simple_interest_linear_in_duration() {
        let short = params(
            5000.0,
            0.0,
            4.0,
            12,
            InterestType::Simple,
            CompoundingFrequency::Monthly,
        );
        let long = params(
            5000.0,
            0.0,
            4.0,
            24,
            InterestType::Simple,
            CompoundingFrequency::Monthly,
        );

        let short_interest = project(&short).unwrap().total_interest;
        let long_interest = project(&long).unwrap().total_interest;
        assert_relative_eq!(long_interest, 2.0 * short_interest, max_relative = 1e-9);
    }

    #[test]
    fn test_compound_monthly_beats_simple_over_two_years() {
        let simple = params(
            1000.0,
            500.0,
            5.0,
            24,
            InterestType::Simple,
            CompoundingFrequency::Monthly,
        );
        let compound = params(
            1000.0,
            500.0,
            5.0,
            24,
            InterestType::Compound,
            CompoundingFrequency::Monthly,
        );

        let simple_final = project(&simple).unwrap().final_value;
        let compound_final = project(&compound).unwrap().final_value;
        assert!(
            compound_final > simple_final,
            "compound {} should exceed simple {}",
            compound_final,
            simple_final
        );
    }

    #[test]
    fn test_final_balance_reconciles_with_totals() {
        let p = params(
            2000.0,
            150.0,
            7.0,
            60,
            InterestType::Compound,
            CompoundingFrequency::Quarterly,
        );
        let projection = project(&p).unwrap();

        let expected =
            2000.0 + projection.total_contributions + projection.total_interest;
        assert!((projection.final_value - expected).abs() < 0.01);
        assert!((projection.total_contributions - 9000.0).abs() < 1e-9);
    }

    #[test]
    fn test_balance_is_monotonically_non_decreasing() {
        for interest_type in [InterestType::Simple, InterestType::Compound] {
            let p = params(
                1500.0,
                50.0,
                3.5,
                120,
                interest_type,
                CompoundingFrequency::Monthly,
            );
            let projection = project(&p).unwrap();
            assert_eq!(projection.points.len(), 120);
            for pair in projection.points.windows(2) {
                assert!(pair[1].balance >= pair[0].balance);
            }
        }
    }

    #[test]
    fn test_zero_principal_yields_zero_projection() {
        let p = params(
            0.0,
            500.0,
            5.0,
            12,
            InterestType::Compound,
            CompoundingFrequency::Monthly,
        );
        let projection = project(&p).unwrap();

        assert_eq!(projection.points.len(), 12);
        assert_eq!(projection.final_value, 0.0);
        assert_eq!(projection.total_interest, 0.0);
        assert_eq!(projection.total_contributions, 0.0);
        assert!(projection.points.iter().all(|pt| pt.balance == 0.0));
    }

    #[test]
    fn test_presentation_averages_reconcile_with_total() {
        let p = params(
            10_000.0,
            0.0,
            5.0,
            12,
            InterestType::Compound,
            CompoundingFrequency::Monthly,
        );
        let projection = project(&p).unwrap();

        let expected_daily = projection.total_interest / 365.0;
        assert_relative_eq!(
            projection.average_daily_interest,
            expected_daily,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            projection.average_monthly_interest,
            expected_daily * 30.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_zero_rate_earns_no_interest() {
        let p = params(
            1000.0,
            100.0,
            0.0,
            12,
            InterestType::Compound,
            CompoundingFrequency::Monthly,
        );
        let projection = project(&p).unwrap();
        assert!(projection.total_interest.abs() < 1e-9);
        assert!((projection.final_value - 2200.0).abs() < 1e-9);
    }
}
