use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::WealthCalcError;
use crate::types::{Money, Percent, Rate};
use crate::WealthCalcResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const HUNDRED: Decimal = dec!(100);

/// Convert a whole-percentage annual rate (12 = 12%) into a fractional
/// monthly rate (0.01).
pub fn monthly_rate(annual_percent: Percent) -> Rate {
    annual_percent / HUNDRED / MONTHS_PER_YEAR
}

/// Convert a whole-percentage annual rate into a fractional annual rate.
pub fn annual_rate(annual_percent: Percent) -> Rate {
    annual_percent / HUNDRED
}

/// Growth factor (1 + r)^n via closed-form exponentiation.
///
/// `periods` may be fractional (daily compounding of fractional years).
/// Rates at or below -100% have no defined continuation and are rejected.
pub fn compound(rate: Rate, periods: Decimal) -> WealthCalcResult<Decimal> {
    if rate <= dec!(-1) {
        return Err(WealthCalcError::InvalidRange {
            field: "rate".into(),
            reason: "Rate must be greater than -100%".into(),
        });
    }

    Ok((Decimal::ONE + rate).powd(periods))
}

/// Future value of an annuity-due (payments at period start):
/// FV = pmt * [((1+r)^n - 1) / r] * (1+r)
///
/// The zero-rate case degenerates to `pmt * n` and must be branched around,
/// not evaluated through the general formula (0/0).
pub fn fv_annuity_due(payment: Money, rate: Rate, periods: u32) -> WealthCalcResult<Money> {
    if rate.is_zero() {
        return Ok(payment * Decimal::from(periods));
    }

    let factor = compound(rate, Decimal::from(periods))?;
    let series = (factor - Decimal::ONE) / rate;
    Ok(payment * series * (Decimal::ONE + rate))
}

/// Payment solving the annuity-due future-value formula for pmt:
/// pmt = FV * r / [((1+r)^n - 1) * (1+r)]
///
/// This is the exact inverse of `fv_annuity_due`, including the trailing
/// (1+r) divisor. Dropping that divisor overstates the payment by one
/// period's growth.
pub fn annuity_due_payment(future_value: Money, rate: Rate, periods: u32) -> WealthCalcResult<Money> {
    if periods == 0 {
        return Err(WealthCalcError::InvalidRange {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(future_value / Decimal::from(periods));
    }

    let factor = compound(rate, Decimal::from(periods))?;
    let denom = (factor - Decimal::ONE) * (Decimal::ONE + rate);
    if denom.is_zero() {
        return Err(WealthCalcError::DivisionByZero {
            context: "annuity-due payment denominator".into(),
        });
    }

    Ok(future_value * rate / denom)
}

/// Present value of a level ordinary annuity:
/// PV = pmt * [(1 - (1+r)^-n) / r]
pub fn pv_annuity(payment: Money, rate: Rate, periods: u32) -> WealthCalcResult<Money> {
    if rate.is_zero() {
        return Ok(payment * Decimal::from(periods));
    }

    let factor = compound(rate, Decimal::from(periods))?;
    Ok(payment * (Decimal::ONE - Decimal::ONE / factor) / rate)
}
