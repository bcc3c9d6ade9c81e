use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity::{annual_rate, compound};
use crate::error::WealthCalcError;
use crate::types::{round_currency, with_metadata, ComputationOutput, Money, Percent};
use crate::WealthCalcResult;

/// Compounding frequencies offered by the calculator UI.
const CONVENTIONAL_FREQUENCIES: [u32; 5] = [1, 2, 4, 12, 365];

/// Input parameters for a lump-sum compound interest projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpSumInput {
    /// Initial one-time investment
    pub principal: Money,
    /// Annual interest rate as a whole percentage (10 = 10%)
    pub annual_rate_pct: Percent,
    /// Investment horizon in years; fractional values are allowed
    pub years: Decimal,
    /// Compounding periods per year (1, 2, 4, 12 or 365)
    pub compounding_per_year: u32,
}

/// Output of the lump-sum projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpSumOutput {
    /// Value of the investment at the end of the horizon
    pub maturity_value: Money,
    /// Initial investment (echoed back)
    pub principal: Money,
    /// Maturity value minus principal
    pub interest_earned: Money,
}

/// Project the future value of a lump sum under periodic compounding:
///   FV = P * (1 + rate/m)^(m * t)
///
/// The exponent is evaluated in closed form, so daily compounding over
/// multi-decade horizons does not accumulate per-step rounding error.
pub fn project_lump_sum(input: &LumpSumInput) -> WealthCalcResult<ComputationOutput<LumpSumOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(input)?;

    if !CONVENTIONAL_FREQUENCIES.contains(&input.compounding_per_year) {
        warnings.push(format!(
            "Compounding frequency {} is unconventional (expected one of 1, 2, 4, 12, 365)",
            input.compounding_per_year
        ));
    }

    let m = Decimal::from(input.compounding_per_year);
    let periodic_rate = annual_rate(input.annual_rate_pct) / m;
    let periods = m * input.years;

    let growth = compound(periodic_rate, periods)?;
    let maturity_value = round_currency(input.principal * growth);
    let interest_earned = maturity_value - input.principal;

    let output = LumpSumOutput {
        maturity_value,
        principal: input.principal,
        interest_earned,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Compound Interest (closed-form periodic compounding)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "years": input.years.to_string(),
            "compounding_per_year": input.compounding_per_year,
        }),
        warnings,
        elapsed,
        output,
    ))
}

fn validate(input: &LumpSumInput) -> WealthCalcResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(WealthCalcError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be > 0".into(),
        });
    }
    if input.years <= Decimal::ZERO {
        return Err(WealthCalcError::InvalidRange {
            field: "years".into(),
            reason: "Investment horizon must be > 0".into(),
        });
    }
    if input.compounding_per_year == 0 {
        return Err(WealthCalcError::InvalidRange {
            field: "compounding_per_year".into(),
            reason: "Compounding frequency must be > 0".into(),
        });
    }
    if input.annual_rate_pct <= dec!(-100) {
        return Err(WealthCalcError::InvalidRange {
            field: "annual_rate_pct".into(),
            reason: "Annual rate must be greater than -100%".into(),
        });
    }
    Ok(())
}
