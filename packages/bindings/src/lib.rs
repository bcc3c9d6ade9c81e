use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Projection calculators
//
// Each function takes the input record as a JSON string from the frontend
// and returns the serialized computation envelope. Decimal fields travel as
// strings to avoid f64 truncation in the JS layer.
// ---------------------------------------------------------------------------

#[napi]
pub fn sip_future_value(input_json: String) -> NapiResult<String> {
    let input: wealth_calc_core::projections::sip::SipInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        wealth_calc_core::projections::sip::project_sip(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compound_interest(input_json: String) -> NapiResult<String> {
    let input: wealth_calc_core::projections::lumpsum::LumpSumInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = wealth_calc_core::projections::lumpsum::project_lump_sum(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn required_sip_for_goal(input_json: String) -> NapiResult<String> {
    let input: wealth_calc_core::projections::goal::GoalInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        wealth_calc_core::projections::goal::solve_goal(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn retirement_plan(input_json: String) -> NapiResult<String> {
    let input: wealth_calc_core::projections::retirement::RetirementInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = wealth_calc_core::projections::retirement::plan_retirement(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
