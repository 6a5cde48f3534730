//! Loan input parameters and validation

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How the loan's principal is paid down over the term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationType {
    /// Level installment; interest charged on the declining balance
    ReducingBalance,
    /// Interest charged on the original principal for the full term,
    /// principal repaid in equal parts
    FlatRate,
    /// Interest-only periods with the entire principal due at maturity
    BulletPayment,
}

impl AmortizationType {
    /// All supported types, in display order
    pub fn all() -> [AmortizationType; 3] {
        [
            AmortizationType::ReducingBalance,
            AmortizationType::FlatRate,
            AmortizationType::BulletPayment,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AmortizationType::ReducingBalance => "ReducingBalance",
            AmortizationType::FlatRate => "FlatRate",
            AmortizationType::BulletPayment => "BulletPayment",
        }
    }
}

/// How often payments are made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
}

impl PaymentFrequency {
    /// Number of payments in a calendar year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::Biweekly => 26,
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::Quarterly => 4,
        }
    }

    /// Number of payments over a term expressed in months (minimum 1)
    pub fn payment_count(&self, term_months: u32) -> u32 {
        let count =
            (term_months as f64 * self.payments_per_year() as f64 / 12.0).round() as u32;
        count.max(1)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Weekly => "Weekly",
            PaymentFrequency::Biweekly => "Biweekly",
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::Quarterly => "Quarterly",
        }
    }
}

/// Immutable inputs for a single amortization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed
    pub principal: f64,

    /// Annual nominal interest rate as a percentage (0-100)
    pub annual_rate_pct: f64,

    /// Loan term in months
    pub term_months: u32,

    /// Amortization method
    pub amortization: AmortizationType,

    /// Payment frequency
    pub frequency: PaymentFrequency,
}

impl LoanParameters {
    pub fn new(
        principal: f64,
        annual_rate_pct: f64,
        term_months: u32,
        amortization: AmortizationType,
        frequency: PaymentFrequency,
    ) -> Self {
        Self {
            principal,
            annual_rate_pct,
            term_months,
            amortization,
            frequency,
        }
    }

    /// Convenience constructor for a monthly reducing-balance loan
    pub fn monthly(principal: f64, annual_rate_pct: f64, term_months: u32) -> Self {
        Self::new(
            principal,
            annual_rate_pct,
            term_months,
            AmortizationType::ReducingBalance,
            PaymentFrequency::Monthly,
        )
    }

    /// Periodic interest rate as a decimal (e.g. 0.085/12 for 8.5% monthly)
    pub fn period_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / self.frequency.payments_per_year() as f64
    }

    /// Total number of payments over the term
    pub fn payment_count(&self) -> u32 {
        self.frequency.payment_count(self.term_months)
    }

    /// Term expressed in years
    pub fn term_years(&self) -> f64 {
        self.term_months as f64 / 12.0
    }

    /// Reject parameters outside the calculator's domain.
    /// Called before any schedule is built; no partial schedule is
    /// produced from invalid input.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(EngineError::invalid(
                "principal",
                format!("must be positive, got {}", self.principal),
            ));
        }
        if self.term_months == 0 {
            return Err(EngineError::invalid("term_months", "must be at least 1"));
        }
        if !self.annual_rate_pct.is_finite()
            || self.annual_rate_pct < 0.0
            || self.annual_rate_pct > 100.0
        {
            return Err(EngineError::invalid(
                "annual_rate_pct",
                format!("must be within 0-100, got {}", self.annual_rate_pct),
            ));
        }
        Ok(())
    }
}
