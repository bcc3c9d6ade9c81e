use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use wealth_calc_core::projections::goal::{self, GoalInput};
use wealth_calc_core::projections::lumpsum::{self, LumpSumInput};
use wealth_calc_core::projections::retirement::{self, RetirementInput};
use wealth_calc_core::projections::sip::{self, SipInput};

use crate::input;

/// Arguments for SIP projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SipArgs {
    /// Monthly contribution (invested at the start of each month)
    #[arg(long)]
    pub monthly: Option<Decimal>,

    /// Expected annual return in percent (e.g. 12 for 12%)
    #[arg(long, alias = "return")]
    pub rate: Option<Decimal>,

    /// Investment horizon in whole years
    #[arg(long)]
    pub years: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for lump-sum compound interest
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LumpSumArgs {
    /// Initial one-time investment
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 10 for 10%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Investment horizon in years (fractional allowed)
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Compounding periods per year (1, 2, 4, 12 or 365)
    #[arg(long, default_value = "1", alias = "frequency")]
    pub compounding: u32,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the goal-based SIP solver
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct GoalArgs {
    /// Target amount to accumulate
    #[arg(long)]
    pub target: Option<Decimal>,

    /// Current age in years
    #[arg(long)]
    pub current_age: Option<u32>,

    /// Age by which the target must be reached
    #[arg(long)]
    pub goal_age: Option<u32>,

    /// Expected annual return in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for retirement corpus planning
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RetirementArgs {
    /// Current age in years
    #[arg(long)]
    pub current_age: Option<u32>,

    /// Planned retirement age
    #[arg(long)]
    pub retirement_age: Option<u32>,

    /// Household expenses per month today
    #[arg(long)]
    pub monthly_expenses: Option<Decimal>,

    /// Expected nominal annual return in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Expected annual inflation in percent
    #[arg(long)]
    pub inflation: Option<Decimal>,

    /// Planning horizon (life expectancy)
    #[arg(long, default_value = "85")]
    pub life_expectancy: u32,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SipInput {
            monthly_investment: args.monthly.ok_or("--monthly is required (or provide --input)")?,
            expected_annual_return_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };

    let result = sip::project_sip(&sip_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_lump_sum(args: LumpSumArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ls_input: LumpSumInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LumpSumInput {
            principal: args.principal.ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            compounding_per_year: args.compounding,
        }
    };

    let result = lumpsum::project_lump_sum(&ls_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_goal(args: GoalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let goal_input: GoalInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        GoalInput {
            target_amount: args.target.ok_or("--target is required (or provide --input)")?,
            current_age: args
                .current_age
                .ok_or("--current-age is required (or provide --input)")?,
            goal_age: args.goal_age.ok_or("--goal-age is required (or provide --input)")?,
            expected_annual_return_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
        }
    };

    let result = goal::solve_goal(&goal_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_retirement(args: RetirementArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ret_input: RetirementInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RetirementInput {
            current_age: args
                .current_age
                .ok_or("--current-age is required (or provide --input)")?,
            retirement_age: args
                .retirement_age
                .ok_or("--retirement-age is required (or provide --input)")?,
            current_monthly_expenses: args
                .monthly_expenses
                .ok_or("--monthly-expenses is required (or provide --input)")?,
            expected_annual_return_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            annual_inflation_pct: args
                .inflation
                .ok_or("--inflation is required (or provide --input)")?,
            life_expectancy: args.life_expectancy,
        }
    };

    let result = retirement::plan_retirement(&ret_input)?;
    Ok(serde_json::to_value(result)?)
}
