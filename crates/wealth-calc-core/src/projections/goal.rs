use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity::{annuity_due_payment, monthly_rate};
use crate::error::WealthCalcError;
use crate::types::{round_currency, with_metadata, ComputationOutput, Money, Percent};
use crate::WealthCalcResult;

/// Input parameters for a goal-based investment plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInput {
    /// Target amount to accumulate by the goal age
    pub target_amount: Money,
    /// Investor's current age in years
    pub current_age: u32,
    /// Age at which the target must be reached; must exceed current_age
    pub goal_age: u32,
    /// Expected annual return as a whole percentage (12 = 12%)
    pub expected_annual_return_pct: Percent,
}

/// Output of the goal solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalOutput {
    /// Monthly contribution needed to reach the target
    pub required_monthly_sip: Money,
    /// Sum of all contributions over the horizon
    pub total_investment: Money,
    /// Target amount minus contributions
    pub wealth_gain: Money,
    /// Number of monthly contributions
    pub months: u32,
}

/// Solve for the monthly SIP needed to reach `target_amount` by `goal_age`.
///
/// Inverts the annuity-due future-value formula exactly:
///   pmt = FV * r / [((1+r)^n - 1) * (1+r)]
///
/// The trailing (1+r) divisor matches the start-of-month payment convention
/// of the SIP projection; the ordinary-annuity inverse (without it) quotes a
/// contribution one period's growth too high.
pub fn solve_goal(input: &GoalInput) -> WealthCalcResult<ComputationOutput<GoalOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(input)?;

    if input.expected_annual_return_pct < Decimal::ZERO {
        warnings.push("Expected annual return is negative — contributions will exceed the target".into());
    }

    let years = input.goal_age - input.current_age;
    let months = years * 12;
    let rate = monthly_rate(input.expected_annual_return_pct);

    let required_monthly_sip = round_currency(annuity_due_payment(input.target_amount, rate, months)?);
    let total_investment = round_currency(required_monthly_sip * Decimal::from(months));
    let wealth_gain = input.target_amount - total_investment;

    let output = GoalOutput {
        required_monthly_sip,
        total_investment,
        wealth_gain,
        months,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Goal-Based SIP (annuity-due payment solver)",
        &serde_json::json!({
            "target_amount": input.target_amount.to_string(),
            "current_age": input.current_age,
            "goal_age": input.goal_age,
            "expected_annual_return_pct": input.expected_annual_return_pct.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

fn validate(input: &GoalInput) -> WealthCalcResult<()> {
    if input.target_amount <= Decimal::ZERO {
        return Err(WealthCalcError::InvalidInput {
            field: "target_amount".into(),
            reason: "Target amount must be > 0".into(),
        });
    }
    if input.goal_age <= input.current_age {
        return Err(WealthCalcError::InvalidRange {
            field: "goal_age".into(),
            reason: "Goal age must be greater than current age".into(),
        });
    }
    if input.expected_annual_return_pct <= dec!(-100) {
        return Err(WealthCalcError::InvalidRange {
            field: "expected_annual_return_pct".into(),
            reason: "Annual return must be greater than -100%".into(),
        });
    }
    Ok(())
}
