//! Compare amortization types for one loan parameter set
//!
//! Runs reducing-balance, flat-rate, and bullet schedules in parallel
//! and prints a side-by-side comparison.
//! Supports JSON output for API integration via --json flag
//! Accepts config via environment variables:
//!   PRINCIPAL, ANNUAL_RATE, TERM_MONTHS, PAYMENT_FREQUENCY

use anyhow::{bail, Result};
use finverse_engine::loan::round_cents;
use finverse_engine::{LoanParameters, PaymentFrequency, ScenarioRunner};
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct ComparisonResponse {
    principal: f64,
    annual_rate_pct: f64,
    term_months: u32,
    payment_frequency: &'static str,
    scenarios: Vec<ScenarioOutput>,
    execution_time_ms: u64,
}

#[derive(Serialize)]
struct ScenarioOutput {
    amortization: &'static str,
    payment_count: usize,
    emi_amount: f64,
    total_payment: f64,
    total_interest: f64,
    effective_interest_rate_pct: f64,
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_frequency() -> Result<PaymentFrequency> {
    match env::var("PAYMENT_FREQUENCY").as_deref() {
        Err(_) | Ok("monthly") => Ok(PaymentFrequency::Monthly),
        Ok("weekly") => Ok(PaymentFrequency::Weekly),
        Ok("biweekly") => Ok(PaymentFrequency::Biweekly),
        Ok("quarterly") => Ok(PaymentFrequency::Quarterly),
        Ok(other) => bail!("unknown PAYMENT_FREQUENCY: {other}"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let json_output = env::args().any(|a| a == "--json");

    let mut base = LoanParameters::monthly(
        env_f64("PRINCIPAL", 50_000.0),
        env_f64("ANNUAL_RATE", 8.5),
        env_u32("TERM_MONTHS", 60),
    );
    base.frequency = env_frequency()?;

    let start = Instant::now();
    let runner = ScenarioRunner::new(base.clone());
    let results = runner.compare_types();

    let mut scenarios = Vec::with_capacity(results.len());
    for (amortization, result) in results {
        let schedule = result?;
        let summary = schedule.summary();
        scenarios.push(ScenarioOutput {
            amortization: amortization.as_str(),
            payment_count: schedule.entries.len(),
            emi_amount: round_cents(summary.emi_amount),
            total_payment: round_cents(summary.total_payment),
            total_interest: round_cents(summary.total_interest),
            effective_interest_rate_pct: round_cents(summary.effective_interest_rate_pct),
        });
    }

    let response = ComparisonResponse {
        principal: base.principal,
        annual_rate_pct: base.annual_rate_pct,
        term_months: base.term_months,
        payment_frequency: base.frequency.as_str(),
        scenarios,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "Loan Comparison: ${:.2} at {:.2}% over {} months ({})",
        response.principal,
        response.annual_rate_pct,
        response.term_months,
        response.payment_frequency,
    );
    println!();
    println!(
        "{:<16} {:>6} {:>12} {:>14} {:>14} {:>10}",
        "Amortization", "Pmts", "Installment", "TotalPayment", "TotalInterest", "EffRate"
    );
    println!("{}", "-".repeat(78));
    for s in &response.scenarios {
        println!(
            "{:<16} {:>6} {:>12.2} {:>14.2} {:>14.2} {:>9.2}%",
            s.amortization,
            s.payment_count,
            s.emi_amount,
            s.total_payment,
            s.total_interest,
            s.effective_interest_rate_pct,
        );
    }
    println!("\nCompleted in {} ms", response.execution_time_ms);

    Ok(())
}
