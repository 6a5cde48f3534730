//! Loan amortization: parameters, schedule construction, summary totals

mod params;
mod schedule;
mod engine;

pub use params::{LoanParameters, AmortizationType, PaymentFrequency};
pub use schedule::{ScheduleEntry, AmortizationSchedule, LoanSummary, round_cents};
pub use engine::LoanEngine;
