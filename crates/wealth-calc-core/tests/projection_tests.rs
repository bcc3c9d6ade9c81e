use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use wealth_calc_core::annuity;
use wealth_calc_core::projections::{goal, lumpsum, retirement, sip};
use wealth_calc_core::WealthCalcError;

// ===========================================================================
// Zero-rate linearity
// ===========================================================================

#[test]
fn test_zero_rate_sip_is_exactly_linear() {
    for (amount, years) in [(dec!(500), 1u32), (dec!(5000), 10), (dec!(12_345), 40)] {
        let input = sip::SipInput {
            monthly_investment: amount,
            expected_annual_return_pct: Decimal::ZERO,
            years,
        };
        let result = sip::project_sip(&input).unwrap();
        assert_eq!(
            result.result.maturity_value,
            amount * Decimal::from(years * 12)
        );
    }
}

#[test]
fn test_zero_rate_goal_is_exactly_linear() {
    let input = goal::GoalInput {
        target_amount: dec!(480_000),
        current_age: 30,
        goal_age: 34,
        expected_annual_return_pct: Decimal::ZERO,
    };
    let result = goal::solve_goal(&input).unwrap();
    // 480,000 over 48 months
    assert_eq!(result.result.required_monthly_sip, dec!(10_000));
}

// ===========================================================================
// Goal <-> SIP round trip
// ===========================================================================

#[test]
fn test_goal_round_trip_exact_on_primitives() {
    // At Decimal precision the payment solver is the exact inverse of the
    // annuity-due future value
    for (target, rate_pct, years) in [
        (dec!(1_000_000), dec!(12), 10u32),
        (dec!(2_500_000), dec!(8), 25),
        (dec!(750_000), dec!(15), 5),
    ] {
        let rate = annuity::monthly_rate(rate_pct);
        let months = years * 12;

        let pmt = annuity::annuity_due_payment(target, rate, months).unwrap();
        let fv = annuity::fv_annuity_due(pmt, rate, months).unwrap();

        assert!(
            (fv - target).abs() < dec!(0.01),
            "target={target} fv={fv}"
        );
    }
}

#[test]
fn test_goal_round_trip_end_to_end_within_rounding_slack() {
    // The published monthly SIP is rounded to a whole unit, so re-projecting
    // it can drift from the target by up to half a unit times the annuity
    // factor (~232 at 12%/10y), well under 0.02% of the target
    let goal_input = goal::GoalInput {
        target_amount: dec!(1_000_000),
        current_age: 25,
        goal_age: 35,
        expected_annual_return_pct: dec!(12),
    };
    let solved = goal::solve_goal(&goal_input).unwrap();

    let sip_input = sip::SipInput {
        monthly_investment: solved.result.required_monthly_sip,
        expected_annual_return_pct: dec!(12),
        years: 10,
    };
    let projected = sip::project_sip(&sip_input).unwrap();

    let drift = (projected.result.maturity_value - goal_input.target_amount).abs();
    assert!(drift <= dec!(200), "drift={}", drift);
}

// ===========================================================================
// Monotonicity and compounding-frequency ordering
// ===========================================================================

#[test]
fn test_lump_sum_strictly_increasing_in_rate() {
    let mut previous = Decimal::ZERO;
    for rate in [dec!(0), dec!(2), dec!(5), dec!(10), dec!(18)] {
        let input = lumpsum::LumpSumInput {
            principal: dec!(100_000),
            annual_rate_pct: rate,
            years: dec!(10),
            compounding_per_year: 12,
        };
        let fv = lumpsum::project_lump_sum(&input).unwrap().result.maturity_value;
        assert!(fv > previous, "rate={rate} fv={fv}");
        previous = fv;
    }
}

#[test]
fn test_lump_sum_strictly_increasing_in_time() {
    let mut previous = Decimal::ZERO;
    for years in [dec!(0.5), dec!(1), dec!(5), dec!(20), dec!(50)] {
        let input = lumpsum::LumpSumInput {
            principal: dec!(100_000),
            annual_rate_pct: dec!(10),
            years,
            compounding_per_year: 1,
        };
        let fv = lumpsum::project_lump_sum(&input).unwrap().result.maturity_value;
        assert!(fv > previous, "years={years} fv={fv}");
        previous = fv;
    }
}

#[test]
fn test_lump_sum_frequency_ordering() {
    // Daily >= monthly >= annual for the same nominal rate
    let fv_at = |m: u32| {
        let input = lumpsum::LumpSumInput {
            principal: dec!(100_000),
            annual_rate_pct: dec!(10),
            years: dec!(5),
            compounding_per_year: m,
        };
        lumpsum::project_lump_sum(&input).unwrap().result.maturity_value
    };

    let annual = fv_at(1);
    let monthly = fv_at(12);
    let daily = fv_at(365);

    assert!(daily >= monthly, "daily={daily} monthly={monthly}");
    assert!(monthly >= annual, "monthly={monthly} annual={annual}");
}

// ===========================================================================
// Retirement composite consistency
// ===========================================================================

#[test]
fn test_retirement_sip_reproduces_corpus() {
    let input = retirement::RetirementInput {
        current_age: 30,
        retirement_age: 60,
        current_monthly_expenses: dec!(50_000),
        expected_annual_return_pct: dec!(10),
        annual_inflation_pct: dec!(6),
        life_expectancy: 85,
    };
    let plan = retirement::plan_retirement(&input).unwrap();
    let out = &plan.result;

    // Project the published SIP at the nominal rate over the accumulation
    // phase; it must land on the corpus within the slack introduced by
    // rounding the SIP to a whole unit (annuity factor ≈ 2279 at 10%/30y)
    let rate = annuity::monthly_rate(dec!(10));
    let projected = annuity::fv_annuity_due(out.required_monthly_sip, rate, 360).unwrap();

    let drift = (projected - out.corpus_needed).abs();
    let slack = dec!(0.5) * annuity::fv_annuity_due(Decimal::ONE, rate, 360).unwrap() + dec!(1);
    assert!(drift <= slack, "drift={drift} slack={slack}");
}

// ===========================================================================
// Invalid-range rejection
// ===========================================================================

#[test]
fn test_goal_age_before_current_age_is_range_error() {
    let input = goal::GoalInput {
        target_amount: dec!(1_000_000),
        current_age: 35,
        goal_age: 30,
        expected_annual_return_pct: dec!(12),
    };
    match goal::solve_goal(&input) {
        Err(WealthCalcError::InvalidRange { field, .. }) => assert_eq!(field, "goal_age"),
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn test_rates_at_or_below_total_loss_are_range_errors() {
    let sip_input = sip::SipInput {
        monthly_investment: dec!(5000),
        expected_annual_return_pct: dec!(-120),
        years: 10,
    };
    assert!(matches!(
        sip::project_sip(&sip_input),
        Err(WealthCalcError::InvalidRange { .. })
    ));

    let ls_input = lumpsum::LumpSumInput {
        principal: dec!(100_000),
        annual_rate_pct: dec!(-100),
        years: dec!(5),
        compounding_per_year: 1,
    };
    assert!(matches!(
        lumpsum::project_lump_sum(&ls_input),
        Err(WealthCalcError::InvalidRange { .. })
    ));
}

#[test]
fn test_errors_are_never_nan_or_silent_zero() {
    // A rejected request must not produce a numeric result at all
    let input = goal::GoalInput {
        target_amount: dec!(1_000_000),
        current_age: 40,
        goal_age: 40,
        expected_annual_return_pct: dec!(12),
    };
    assert!(goal::solve_goal(&input).is_err());
}
