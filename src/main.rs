//! FinVerse Engine CLI
//!
//! Command-line interface for running financial projections

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use finverse_engine::{
    savings, staking, AmortizationType, CompoundingFrequency, InterestType, LoanEngine,
    LoanParameters, PaymentFrequency, RewardWindow, SavingsParameters,
};

#[derive(Parser)]
#[command(name = "finverse", version, about = "Financial projection engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a loan amortization schedule
    Loan(LoanArgs),
    /// Project savings growth month by month
    Savings(SavingsArgs),
    /// Build a staking reward timeline from a positions CSV
    Staking(StakingArgs),
}

#[derive(Args)]
struct LoanArgs {
    /// Amount borrowed
    principal: f64,

    /// Annual interest rate (percent)
    rate: f64,

    /// Term in months
    term_months: u32,

    /// Amortization type: reducing-balance | flat-rate | bullet
    #[arg(long, default_value = "reducing-balance")]
    amortization: String,

    /// Payment frequency: weekly | biweekly | monthly | quarterly
    #[arg(long, default_value = "monthly")]
    frequency: String,

    /// Write the full schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct SavingsArgs {
    /// Opening balance
    initial: f64,

    /// Monthly contribution
    contribution: f64,

    /// Annual interest rate (percent)
    rate: f64,

    /// Projection horizon in months
    months: u32,

    /// Interest type: simple | compound
    #[arg(long, default_value = "compound")]
    interest: String,

    /// Compounding frequency: annually | quarterly | monthly | weekly | daily
    #[arg(long, default_value = "monthly")]
    compounding: String,

    /// Write the monthly series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct StakingArgs {
    /// Positions CSV (PositionId,Amount,APY,Bonus,StartDate)
    positions: PathBuf,

    /// First day of the timeline (defaults to earliest stake start)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day of the timeline (defaults to today)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Write the daily series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Loan(args) => run_loan(args),
        Command::Savings(args) => run_savings(args),
        Command::Staking(args) => run_staking(args),
    }
}

fn parse_amortization(s: &str) -> Result<AmortizationType> {
    match s {
        "reducing-balance" => Ok(AmortizationType::ReducingBalance),
        "flat-rate" => Ok(AmortizationType::FlatRate),
        "bullet" => Ok(AmortizationType::BulletPayment),
        other => bail!("unknown amortization type: {other}"),
    }
}

fn parse_frequency(s: &str) -> Result<PaymentFrequency> {
    match s {
        "weekly" => Ok(PaymentFrequency::Weekly),
        "biweekly" => Ok(PaymentFrequency::Biweekly),
        "monthly" => Ok(PaymentFrequency::Monthly),
        "quarterly" => Ok(PaymentFrequency::Quarterly),
        other => bail!("unknown payment frequency: {other}"),
    }
}

fn parse_interest(s: &str) -> Result<InterestType> {
    match s {
        "simple" => Ok(InterestType::Simple),
        "compound" => Ok(InterestType::Compound),
        other => bail!("unknown interest type: {other}"),
    }
}

fn parse_compounding(s: &str) -> Result<CompoundingFrequency> {
    match s {
        "annually" => Ok(CompoundingFrequency::Annually),
        "quarterly" => Ok(CompoundingFrequency::Quarterly),
        "monthly" => Ok(CompoundingFrequency::Monthly),
        "weekly" => Ok(CompoundingFrequency::Weekly),
        "daily" => Ok(CompoundingFrequency::Daily),
        other => bail!("unknown compounding frequency: {other}"),
    }
}

fn run_loan(args: LoanArgs) -> Result<()> {
    let params = LoanParameters::new(
        args.principal,
        args.rate,
        args.term_months,
        parse_amortization(&args.amortization)?,
        parse_frequency(&args.frequency)?,
    );

    let schedule = LoanEngine::amortize(&params)?;
    let summary = schedule.summary();

    println!(
        "Loan: ${:.2} at {:.2}% over {} months ({:?}, {:?})",
        params.principal, params.annual_rate_pct, params.term_months,
        params.amortization, params.frequency,
    );
    println!();
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>14}",
        "Pmt", "Payment", "Principal", "Interest", "Balance"
    );
    println!("{}", "-".repeat(60));

    for entry in schedule.entries.iter().take(24) {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            entry.payment_index,
            entry.payment_amount,
            entry.principal_component,
            entry.interest_component,
            entry.remaining_balance,
        );
    }
    if schedule.entries.len() > 24 {
        println!("... ({} more payments)", schedule.entries.len() - 24);
    }

    println!("\nSummary:");
    println!("  Installment:        ${:.2}", summary.emi_amount);
    println!("  Total Payment:      ${:.2}", summary.total_payment);
    println!("  Total Interest:     ${:.2}", summary.total_interest);
    println!("  Effective Rate:     {:.2}%", summary.effective_interest_rate_pct);

    if let Some(path) = args.csv {
        write_loan_csv(&path, &schedule.entries)?;
        println!("\nFull schedule written to: {}", path.display());
    }
    Ok(())
}

fn write_loan_csv(path: &Path, entries: &[finverse_engine::loan::ScheduleEntry]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("unable to create {}", path.display()))?;
    writeln!(file, "PaymentIndex,Payment,Principal,Interest,RemainingBalance")?;
    for entry in entries {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2}",
            entry.payment_index,
            entry.payment_amount,
            entry.principal_component,
            entry.interest_component,
            entry.remaining_balance,
        )?;
    }
    Ok(())
}

fn run_savings(args: SavingsArgs) -> Result<()> {
    let params = SavingsParameters::new(
        args.initial,
        args.contribution,
        args.rate,
        args.months,
        parse_interest(&args.interest)?,
        parse_compounding(&args.compounding)?,
    );

    let projection = savings::project(&params)?;

    println!(
        "Savings: ${:.2} + ${:.2}/month at {:.2}% over {} months ({:?})",
        params.initial_amount, params.monthly_contribution, params.annual_rate_pct,
        params.duration_months, params.interest_type,
    );
    println!();
    println!("{:>5} {:>14} {:>14}", "Month", "Balance", "InterestCum");
    println!("{}", "-".repeat(36));

    for point in projection.points.iter().take(24) {
        println!(
            "{:>5} {:>14.2} {:>14.2}",
            point.month_index, point.balance, point.interest_earned_cumulative,
        );
    }
    if projection.points.len() > 24 {
        println!("... ({} more months)", projection.points.len() - 24);
    }

    println!("\nSummary:");
    println!("  Final Value:          ${:.2}", projection.final_value);
    println!("  Total Contributions:  ${:.2}", projection.total_contributions);
    println!("  Total Interest:       ${:.2}", projection.total_interest);
    println!("  Avg Daily Interest:   ${:.4}", projection.average_daily_interest);
    println!("  Avg Monthly Interest: ${:.2}", projection.average_monthly_interest);

    if let Some(path) = args.csv {
        let mut file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        writeln!(file, "Month,Balance,InterestCumulative")?;
        for point in &projection.points {
            writeln!(
                file,
                "{},{:.2},{:.2}",
                point.month_index, point.balance, point.interest_earned_cumulative,
            )?;
        }
        println!("\nFull series written to: {}", path.display());
    }
    Ok(())
}

fn run_staking(args: StakingArgs) -> Result<()> {
    let positions = staking::load_positions(&args.positions)?;
    let end = args.to.unwrap_or_else(|| Utc::now().date_naive());
    let window = match args.from {
        Some(from) => RewardWindow::between(from, end),
        None => RewardWindow::through(end),
    };

    let timeline = staking::reward_timeline(&positions, window);

    println!("Staking: {} positions through {}", positions.len(), end);
    println!();
    println!("{:>12} {:>14} {:>12}", "Date", "TotalReward", "DailyDelta");
    println!("{}", "-".repeat(40));

    for point in timeline.points.iter().take(24) {
        println!(
            "{:>12} {:>14.6} {:>12.6}",
            point.date, point.total_reward_accrued, point.daily_reward_delta,
        );
    }
    if timeline.points.len() > 24 {
        println!("... ({} more days)", timeline.points.len() - 24);
    }

    println!("\nSummary:");
    println!("  Total Reward Accrued: {:.6}", timeline.total_reward());
    println!("  Reward In Window:     {:.6}", timeline.window_reward());

    if let Some(path) = args.csv {
        let mut file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        writeln!(file, "Date,TotalReward,DailyDelta")?;
        for point in &timeline.points {
            writeln!(
                file,
                "{},{:.8},{:.8}",
                point.date, point.total_reward_accrued, point.daily_reward_delta,
            )?;
        }
        println!("\nFull series written to: {}", path.display());
    }
    Ok(())
}
