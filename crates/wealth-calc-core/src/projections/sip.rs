use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::annuity::{fv_annuity_due, monthly_rate};
use crate::error::WealthCalcError;
use crate::types::{round_currency, with_metadata, ComputationOutput, Money, Percent};
use crate::WealthCalcResult;

/// Input parameters for a systematic investment plan (SIP) projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    /// Fixed contribution invested at the start of each month
    pub monthly_investment: Money,
    /// Expected annual return as a whole percentage (12 = 12%)
    pub expected_annual_return_pct: Percent,
    /// Investment horizon in whole years
    pub years: u32,
}

/// Output of the SIP projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipOutput {
    /// Value of the plan at the end of the horizon
    pub maturity_value: Money,
    /// Sum of all contributions
    pub total_invested: Money,
    /// Maturity value minus contributions
    pub total_returns: Money,
    /// Number of monthly contributions
    pub months: u32,
}

/// Project the future value of a monthly SIP.
///
/// Contributions are an annuity-due (paid at the start of each month) and
/// compound monthly:
///   FV = pmt * [((1+r)^n - 1) / r] * (1+r), r = annual% / 100 / 12
///
/// A zero rate degenerates to `pmt * n`. Currency outputs are rounded to
/// the nearest whole unit.
pub fn project_sip(input: &SipInput) -> WealthCalcResult<ComputationOutput<SipOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(input)?;

    if input.expected_annual_return_pct < Decimal::ZERO {
        warnings.push("Expected annual return is negative — projected value will trail contributions".into());
    }

    let rate = monthly_rate(input.expected_annual_return_pct);
    let months = input.years * 12;

    let maturity_value = round_currency(fv_annuity_due(input.monthly_investment, rate, months)?);
    let total_invested = round_currency(input.monthly_investment * Decimal::from(months));
    let total_returns = maturity_value - total_invested;

    let output = SipOutput {
        maturity_value,
        total_invested,
        total_returns,
        months,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SIP Future Value (monthly annuity-due, monthly compounding)",
        &serde_json::json!({
            "monthly_investment": input.monthly_investment.to_string(),
            "expected_annual_return_pct": input.expected_annual_return_pct.to_string(),
            "years": input.years,
        }),
        warnings,
        elapsed,
        output,
    ))
}

fn validate(input: &SipInput) -> WealthCalcResult<()> {
    if input.monthly_investment <= Decimal::ZERO {
        return Err(WealthCalcError::InvalidInput {
            field: "monthly_investment".into(),
            reason: "Monthly investment must be > 0".into(),
        });
    }
    if input.years == 0 {
        return Err(WealthCalcError::InvalidRange {
            field: "years".into(),
            reason: "Investment horizon must be at least 1 year".into(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn default_input() -> SipInput {
        SipInput {
            monthly_investment: dec!(5000),
            expected_annual_return_pct: dec!(12),
            years: 10,
        }
    }

    #[test]
    fn test_sip_regression_fixture() {
        // 5000/month at 12% for 10 years: r = 0.01, n = 120
        let result = project_sip(&default_input()).unwrap();
        let out = &result.result;

        assert_eq!(out.maturity_value, dec!(1_161_695));
        assert_eq!(out.total_invested, dec!(600_000));
        assert_eq!(out.total_returns, dec!(561_695));
        assert_eq!(out.months, 120);
    }

    #[test]
    fn test_sip_zero_rate_is_linear() {
        let mut input = default_input();
        input.expected_annual_return_pct = Decimal::ZERO;

        let result = project_sip(&input).unwrap();
        assert_eq!(result.result.maturity_value, dec!(600_000));
        assert_eq!(result.result.total_returns, Decimal::ZERO);
    }

    #[test]
    fn test_sip_negative_rate_warns_but_computes() {
        let mut input = default_input();
        input.expected_annual_return_pct = dec!(-5);

        let result = project_sip(&input).unwrap();
        assert!(!result.warnings.is_empty());
        assert!(result.result.maturity_value < result.result.total_invested);
    }

    #[test]
    fn test_sip_rejects_zero_amount() {
        let mut input = default_input();
        input.monthly_investment = Decimal::ZERO;
        assert!(project_sip(&input).is_err());
    }

    #[test]
    fn test_sip_rejects_zero_years() {
        let mut input = default_input();
        input.years = 0;
        assert!(matches!(
            project_sip(&input),
            Err(WealthCalcError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_sip_rejects_total_loss_rate() {
        let mut input = default_input();
        input.expected_annual_return_pct = dec!(-100);
        assert!(matches!(
            project_sip(&input),
            Err(WealthCalcError::InvalidRange { .. })
        ));
    }
}
