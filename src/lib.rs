//! FinVerse Engine - Financial projection library
//!
//! This library provides:
//! - Loan amortization schedules (reducing balance, flat rate, bullet)
//!   at weekly through quarterly payment frequencies
//! - Savings growth projections with simple or compound interest and
//!   monthly contributions
//! - Staking reward accrual timelines with per-second pro-rata accrual
//! - Scenario sweeps for batch loan comparisons

pub mod error;
pub mod loan;
pub mod savings;
pub mod staking;
pub mod scenario;

// Re-export commonly used types
pub use error::EngineError;
pub use loan::{
    AmortizationSchedule, AmortizationType, LoanEngine, LoanParameters, LoanSummary,
    PaymentFrequency,
};
pub use savings::{CompoundingFrequency, InterestType, SavingsParameters, SavingsProjection};
pub use scenario::ScenarioRunner;
pub use staking::{RewardTimeline, RewardWindow, StakePosition};
