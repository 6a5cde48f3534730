//! Schedule construction for each amortization type

use super::params::{AmortizationType, LoanParameters};
use super::schedule::{AmortizationSchedule, ScheduleEntry};
use crate::error::EngineError;

/// Balances below this are treated as fully paid off
const BALANCE_EPSILON: f64 = 1e-9;

/// Builds amortization schedules from validated loan parameters
pub struct LoanEngine;

impl LoanEngine {
    /// Build the full amortization schedule for the given parameters.
    ///
    /// Validates first; invalid input is rejected synchronously and no
    /// partial schedule is returned.
    pub fn amortize(params: &LoanParameters) -> Result<AmortizationSchedule, EngineError> {
        params.validate()?;

        let schedule = match params.amortization {
            AmortizationType::ReducingBalance => Self::reducing_balance(params),
            AmortizationType::FlatRate => Self::flat_rate(params),
            AmortizationType::BulletPayment => Self::bullet_payment(params),
        };

        Ok(schedule)
    }

    /// Level installment by the standard annuity formula:
    /// emi = P * r * (1+r)^n / ((1+r)^n - 1)
    ///
    /// Degrades to P/n at r = 0 (the annuity formula is 0/0 there).
    pub fn level_installment(principal: f64, period_rate: f64, payment_count: u32) -> f64 {
        if period_rate.abs() < 1e-12 {
            return principal / payment_count as f64;
        }
        let growth = (1.0 + period_rate).powi(payment_count as i32);
        principal * period_rate * growth / (growth - 1.0)
    }

    /// Interest on the declining balance, level total payment
    fn reducing_balance(params: &LoanParameters) -> AmortizationSchedule {
        let n = params.payment_count();
        let rate = params.period_rate();
        let emi = Self::level_installment(params.principal, rate, n);

        let mut schedule = AmortizationSchedule::new(params.clone(), emi);
        let mut balance = params.principal;

        for index in 1..=n {
            let interest = balance * rate;
            // Final payment may be smaller than the EMI; never amortize
            // more than the outstanding balance
            let principal_component = (emi - interest).min(balance);
            balance -= principal_component;
            if balance < BALANCE_EPSILON {
                balance = 0.0;
            }

            schedule.add_entry(ScheduleEntry {
                payment_index: index,
                payment_amount: principal_component + interest,
                principal_component,
                interest_component: interest,
                remaining_balance: balance,
            });

            // Paid off early: a partial schedule is valid output
            if balance == 0.0 {
                break;
            }
        }

        schedule
    }

    /// Interest on the original principal for the whole term, equal
    /// principal repayments
    fn flat_rate(params: &LoanParameters) -> AmortizationSchedule {
        let n = params.payment_count();
        let total_interest =
            params.principal * params.annual_rate_pct / 100.0 * params.term_years();
        let interest_per_period = total_interest / n as f64;
        let principal_per_period = params.principal / n as f64;

        let mut schedule = AmortizationSchedule::new(
            params.clone(),
            principal_per_period + interest_per_period,
        );

        for index in 1..=n {
            // Exact at the final period, avoiding accumulated drift
            let remaining_balance = params.principal * (n - index) as f64 / n as f64;

            schedule.add_entry(ScheduleEntry {
                payment_index: index,
                payment_amount: principal_per_period + interest_per_period,
                principal_component: principal_per_period,
                interest_component: interest_per_period,
                remaining_balance,
            });
        }

        schedule
    }

    /// Interest-only periods with the entire principal due at maturity
    fn bullet_payment(params: &LoanParameters) -> AmortizationSchedule {
        let n = params.payment_count();
        let interest_per_period = params.principal * params.period_rate();

        let mut schedule = AmortizationSchedule::new(params.clone(), interest_per_period);

        for index in 1..=n {
            let is_final = index == n;
            let principal_component = if is_final { params.principal } else { 0.0 };

            schedule.add_entry(ScheduleEntry {
                payment_index: index,
                payment_amount: principal_component + interest_per_period,
                principal_component,
                interest_component: interest_per_period,
                remaining_balance: if is_final { 0.0 } else { params.principal },
            });
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::PaymentFrequency;

    /// 1-cent tolerance used by the schedule invariants
    const CENT: f64 = 0.01;

    #[test]
    fn test_reducing_balance_principal_sums_to_loan_amount() {
        let params = LoanParameters::monthly(50_000.0, 8.5, 60);
        let schedule = LoanEngine::amortize(&params).unwrap();

        let principal_sum: f64 = schedule
            .entries
            .iter()
            .map(|e| e.principal_component)
            .sum();
        assert!(
            (principal_sum - 50_000.0).abs() < CENT,
            "principal sum {} != 50000",
            principal_sum
        );
    }

    #[test]
    fn test_reducing_balance_final_balance_is_zero() {
        let params = LoanParameters::monthly(50_000.0, 8.5, 60);
        let schedule = LoanEngine::amortize(&params).unwrap();

        let last = schedule.entries.last().unwrap();
        assert!(last.remaining_balance.abs() < CENT);

        // Balance is monotonically non-increasing throughout
        for pair in schedule.entries.windows(2) {
            assert!(pair[1].remaining_balance <= pair[0].remaining_balance + 1e-9);
        }
    }

    #[test]
    fn test_reducing_balance_matches_annuity_formula() {
        // 50000 at 8.5% over 60 months
        let params = LoanParameters::monthly(50_000.0, 8.5, 60);
        let schedule = LoanEngine::amortize(&params).unwrap();
        let summary = schedule.summary();

        // Independent closed-form EMI
        let r = 0.085 / 12.0;
        let growth = (1.0_f64 + r).powi(60);
        let expected_emi = 50_000.0 * r * growth / (growth - 1.0);

        assert!((summary.emi_amount - expected_emi).abs() < 1e-6);
        assert!((summary.emi_amount - 1025.87).abs() < 1.0);

        // Totals consistent with the level installment
        assert!((summary.total_payment - expected_emi * 60.0).abs() < 0.05);
        assert!(
            (summary.total_interest - (summary.total_payment - 50_000.0)).abs() < 1e-6
        );
    }

    #[test]
    fn test_zero_rate_degrades_to_straight_line() {
        let params = LoanParameters::monthly(1200.0, 0.0, 12);
        let schedule = LoanEngine::amortize(&params).unwrap();
        let summary = schedule.summary();

        assert_eq!(schedule.entries.len(), 12);
        assert!((summary.emi_amount - 100.0).abs() < 1e-9);
        assert!(summary.total_interest.abs() < 1e-9);
        assert!((summary.total_payment - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_rate_constant_components() {
        let params = LoanParameters::new(
            12_000.0,
            10.0,
            24,
            AmortizationType::FlatRate,
            PaymentFrequency::Monthly,
        );
        let schedule = LoanEngine::amortize(&params).unwrap();
        assert_eq!(schedule.entries.len(), 24);

        // Flat interest: 12000 * 10% * 2 years / 24 periods = 100/period
        for entry in &schedule.entries {
            assert!((entry.interest_component - 100.0).abs() < 1e-9);
            assert!((entry.principal_component - 500.0).abs() < 1e-9);
        }
        assert_eq!(schedule.entries.last().unwrap().remaining_balance, 0.0);

        let summary = schedule.summary();
        assert!((summary.total_interest - 2400.0).abs() < CENT);
        // Flat 10% over 2 years is an effective 10% simple-equivalent
        assert!((summary.effective_interest_rate_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_bullet_payment_shape() {
        let params = LoanParameters::new(
            10_000.0,
            6.0,
            12,
            AmortizationType::BulletPayment,
            PaymentFrequency::Monthly,
        );
        let schedule = LoanEngine::amortize(&params).unwrap();
        assert_eq!(schedule.entries.len(), 12);

        // Interest-only until maturity: 10000 * 0.5%/month = 50
        for entry in &schedule.entries[..11] {
            assert!((entry.interest_component - 50.0).abs() < 1e-9);
            assert_eq!(entry.principal_component, 0.0);
            assert_eq!(entry.remaining_balance, 10_000.0);
        }

        let last = schedule.entries.last().unwrap();
        assert_eq!(last.principal_component, 10_000.0);
        assert_eq!(last.remaining_balance, 0.0);
        assert!((last.payment_amount - 10_050.0).abs() < 1e-9);
    }

    #[test]
    fn test_quarterly_frequency_payment_count() {
        let params = LoanParameters::new(
            10_000.0,
            8.0,
            60,
            AmortizationType::ReducingBalance,
            PaymentFrequency::Quarterly,
        );
        let schedule = LoanEngine::amortize(&params).unwrap();
        // 5 years of quarterly payments
        assert_eq!(schedule.entries.len(), 20);
        assert!(schedule.entries.last().unwrap().remaining_balance.abs() < CENT);
    }

    #[test]
    fn test_invalid_input_rejected_without_schedule() {
        let err = LoanEngine::amortize(&LoanParameters::monthly(-5.0, 8.0, 12));
        assert!(matches!(
            err,
            Err(EngineError::InvalidInput { field: "principal", .. })
        ));

        let err = LoanEngine::amortize(&LoanParameters::monthly(1000.0, 8.0, 0));
        assert!(matches!(
            err,
            Err(EngineError::InvalidInput { field: "term_months", .. })
        ));
    }
}
