use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity::{annual_rate, annuity_due_payment, compound, monthly_rate, pv_annuity};
use crate::error::WealthCalcError;
use crate::types::{round_currency, with_metadata, ComputationOutput, Money, Percent};
use crate::WealthCalcResult;

/// Conventional planning horizon when no life expectancy is supplied.
const DEFAULT_LIFE_EXPECTANCY: u32 = 85;

fn default_life_expectancy() -> u32 {
    DEFAULT_LIFE_EXPECTANCY
}

/// Input parameters for retirement corpus planning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementInput {
    /// Investor's current age in years
    pub current_age: u32,
    /// Planned retirement age; must exceed current_age
    pub retirement_age: u32,
    /// Household expenses per month today
    pub current_monthly_expenses: Money,
    /// Expected nominal annual return as a whole percentage (10 = 10%)
    pub expected_annual_return_pct: Percent,
    /// Expected annual inflation as a whole percentage (6 = 6%)
    pub annual_inflation_pct: Percent,
    /// Planning horizon; defaults to 85 and must exceed retirement_age
    #[serde(default = "default_life_expectancy")]
    pub life_expectancy: u32,
}

/// Output of the retirement planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementOutput {
    /// Lump sum needed at retirement to fund expenses to life expectancy
    pub corpus_needed: Money,
    /// Monthly contribution needed to accumulate the corpus
    pub required_monthly_sip: Money,
    /// Today's monthly expenses inflated to the retirement date
    pub future_monthly_expenses: Money,
    /// Sum of all contributions over the accumulation phase
    pub total_investment: Money,
    /// Accumulation phase length in years
    pub years_to_retirement: u32,
    /// Decumulation phase length in years
    pub years_in_retirement: u32,
}

/// Size a retirement corpus and the monthly SIP needed to accumulate it.
///
/// Three chained steps:
/// 1. Inflate current monthly expenses to the retirement date.
/// 2. Size the corpus funding those expenses to life expectancy. Expenses
///    keep growing with inflation while the corpus earns the nominal return,
///    so the corpus is the present value of a level annuity at the *real*
///    rate (1+nominal)/(1+inflation) - 1. A non-positive real rate cannot be
///    discounted; the corpus is then the plain sum of annual expenses.
/// 3. Back-solve the monthly contribution via the annuity-due payment
///    solver at the *nominal* monthly rate. The accumulation phase earns
///    nominal returns; only the decumulation sizing uses the real rate.
pub fn plan_retirement(
    input: &RetirementInput,
) -> WealthCalcResult<ComputationOutput<RetirementOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(input)?;

    let years_to_retirement = input.retirement_age - input.current_age;
    let years_in_retirement = input.life_expectancy - input.retirement_age;

    // --- Step 1: inflate expenses to the retirement date ---
    let inflation = annual_rate(input.annual_inflation_pct);
    let future_monthly_expenses = input.current_monthly_expenses
        * compound(inflation, Decimal::from(years_to_retirement))?;
    let annual_expenses = future_monthly_expenses * dec!(12);

    // --- Step 2: size the corpus at the real rate ---
    let nominal = annual_rate(input.expected_annual_return_pct);
    let real_rate = (Decimal::ONE + nominal) / (Decimal::ONE + inflation) - Decimal::ONE;

    let corpus_needed = if real_rate <= Decimal::ZERO {
        warnings.push(
            "Expected return does not beat inflation — corpus sized without discounting".into(),
        );
        annual_expenses * Decimal::from(years_in_retirement)
    } else {
        pv_annuity(annual_expenses, real_rate, years_in_retirement)?
    };

    // --- Step 3: back-solve the monthly SIP at the nominal rate ---
    let months = years_to_retirement * 12;
    let required_monthly_sip =
        annuity_due_payment(corpus_needed, monthly_rate(input.expected_annual_return_pct), months)?;

    let required_monthly_sip = round_currency(required_monthly_sip);
    let output = RetirementOutput {
        corpus_needed: round_currency(corpus_needed),
        required_monthly_sip,
        future_monthly_expenses: round_currency(future_monthly_expenses),
        total_investment: round_currency(required_monthly_sip * Decimal::from(months)),
        years_to_retirement,
        years_in_retirement,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Retirement Corpus Planning (inflation projection, real-rate annuity PV, annuity-due back-solve)",
        &serde_json::json!({
            "current_age": input.current_age,
            "retirement_age": input.retirement_age,
            "life_expectancy": input.life_expectancy,
            "current_monthly_expenses": input.current_monthly_expenses.to_string(),
            "expected_annual_return_pct": input.expected_annual_return_pct.to_string(),
            "annual_inflation_pct": input.annual_inflation_pct.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

fn validate(input: &RetirementInput) -> WealthCalcResult<()> {
    if input.current_monthly_expenses <= Decimal::ZERO {
        return Err(WealthCalcError::InvalidInput {
            field: "current_monthly_expenses".into(),
            reason: "Monthly expenses must be > 0".into(),
        });
    }
    if input.retirement_age <= input.current_age {
        return Err(WealthCalcError::InvalidRange {
            field: "retirement_age".into(),
            reason: "Retirement age must be greater than current age".into(),
        });
    }
    if input.life_expectancy <= input.retirement_age {
        return Err(WealthCalcError::InvalidRange {
            field: "life_expectancy".into(),
            reason: "Life expectancy must be greater than retirement age".into(),
        });
    }
    if input.expected_annual_return_pct <= dec!(-100) {
        return Err(WealthCalcError::InvalidRange {
            field: "expected_annual_return_pct".into(),
            reason: "Annual return must be greater than -100%".into(),
        });
    }
    if input.annual_inflation_pct <= dec!(-100) {
        return Err(WealthCalcError::InvalidRange {
            field: "annual_inflation_pct".into(),
            reason: "Annual inflation must be greater than -100%".into(),
        });
    }
    Ok(())
}
