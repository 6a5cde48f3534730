//! Savings input parameters and validation

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Maximum projection horizon in months (50 years)
pub const MAX_DURATION_MONTHS: u32 = 600;

/// How interest accrues on the savings balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestType {
    /// Interest accrues on principal and contributions only, never on
    /// previously earned interest
    Simple,
    /// Interest compounds at the configured frequency
    Compound,
}

impl InterestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestType::Simple => "Simple",
            InterestType::Compound => "Compound",
        }
    }
}

/// Compounding frequency for compound interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Annually,
    Quarterly,
    Monthly,
    Weekly,
    Daily,
}

impl CompoundingFrequency {
    /// Number of compounding periods in a year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Daily => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Weekly => "Weekly",
            CompoundingFrequency::Daily => "Daily",
        }
    }
}

/// Immutable inputs for a single savings projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsParameters {
    /// Opening balance. Non-positive values are not an error: they
    /// yield an all-zero projection ("nothing to project")
    pub initial_amount: f64,

    /// Contribution added at the start of each month (0 allowed)
    pub monthly_contribution: f64,

    /// Annual nominal interest rate as a percentage (0-100)
    pub annual_rate_pct: f64,

    /// Projection horizon, 1-600 months
    pub duration_months: u32,

    /// Simple or compound accrual
    pub interest_type: InterestType,

    /// Compounding frequency (only used for compound accrual)
    pub compounding: CompoundingFrequency,
}

impl SavingsParameters {
    pub fn new(
        initial_amount: f64,
        monthly_contribution: f64,
        annual_rate_pct: f64,
        duration_months: u32,
        interest_type: InterestType,
        compounding: CompoundingFrequency,
    ) -> Self {
        Self {
            initial_amount,
            monthly_contribution,
            annual_rate_pct,
            duration_months,
            interest_type,
            compounding,
        }
    }

    /// Annual rate as a decimal
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0
    }

    /// Reject parameters outside the calculator's domain
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.initial_amount.is_finite() {
            return Err(EngineError::invalid(
                "initial_amount",
                format!("must be finite, got {}", self.initial_amount),
            ));
        }
        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(EngineError::invalid(
                "monthly_contribution",
                format!("must be non-negative, got {}", self.monthly_contribution),
            ));
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
        if self.duration_months == 0 || self.duration_months > MAX_DURATION_MONTHS {
            return Err(EngineError::invalid(
                "duration_months",
                format!(
                    "must be within 1-{}, got {}",
                    MAX_DURATION_MONTHS, self.duration_months
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SavingsParameters {
        SavingsParameters::new(
            1000.0,
            100.0,
            5.0,
            24,
            InterestType::Compound,
            CompoundingFrequency::Monthly,
        )
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(CompoundingFrequency::Annually.periods_per_year(), 1);
        assert_eq!(CompoundingFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(CompoundingFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(CompoundingFrequency::Weekly.periods_per_year(), 52);
        assert_eq!(CompoundingFrequency::Daily.periods_per_year(), 365);
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let mut p = base();
        p.monthly_contribution = -1.0;
        assert!(p.validate().is_err());

        let mut p = base();
        p.annual_rate_pct = 150.0;
        assert!(p.validate().is_err());

        let mut p = base();
        p.duration_months = 0;
        assert!(p.validate().is_err());

        let mut p = base();
        p.duration_months = MAX_DURATION_MONTHS + 1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_allows_zero_contribution_and_zero_principal() {
        let mut p = base();
        p.monthly_contribution = 0.0;
        assert!(p.validate().is_ok());

        // Non-positive principal is "nothing to project", not invalid
        let mut p = base();
        p.initial_amount = 0.0;
        assert!(p.validate().is_ok());
    }
}
