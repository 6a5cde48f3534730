//! Amortization schedule output structures
//!
//! Schedules carry full floating precision; monetary rounding to two
//! decimals happens only at presentation via [`round_cents`].

use serde::{Deserialize, Serialize};

use super::params::LoanParameters;

/// Round a monetary amount to whole cents for presentation
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// A single payment row in an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based payment sequence number
    pub payment_index: u32,

    /// Total amount paid this period
    pub payment_amount: f64,

    /// Portion of the payment applied to principal
    pub principal_component: f64,

    /// Portion of the payment applied to interest
    pub interest_component: f64,

    /// Outstanding balance after this payment (non-increasing, zero at
    /// the final entry)
    pub remaining_balance: f64,
}

/// Summary totals for a complete schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    /// Level installment amount (regular periodic payment; for bullet
    /// loans this is the interest-only payment)
    pub emi_amount: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    /// Annualized simple-equivalent rate:
    /// total interest / principal / term years, as a percentage
    pub effective_interest_rate_pct: f64,
}

/// Complete amortization result for one parameter set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Parameters the schedule was built from
    pub params: LoanParameters,

    /// Regular periodic payment amount
    pub emi_amount: f64,

    /// Ordered payment rows; may be shorter than the nominal payment
    /// count when the balance reaches zero early
    pub entries: Vec<ScheduleEntry>,
}

impl AmortizationSchedule {
    pub fn new(params: LoanParameters, emi_amount: f64) -> Self {
        Self {
            params,
            emi_amount,
            entries: Vec::new(),
        }
    }

    /// Add a payment row
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Compute summary totals from the payment rows
    pub fn summary(&self) -> LoanSummary {
        let total_payment: f64 = self.entries.iter().map(|e| e.payment_amount).sum();
        let total_interest: f64 = self.entries.iter().map(|e| e.interest_component).sum();

        let years = self.params.term_years();
        let effective_interest_rate_pct = if years > 0.0 && self.params.principal > 0.0 {
            total_interest / self.params.principal / years * 100.0
        } else {
            0.0
        };

        LoanSummary {
            emi_amount: self.emi_amount,
            total_payment,
            total_interest,
            effective_interest_rate_pct,
        }
    }
}
