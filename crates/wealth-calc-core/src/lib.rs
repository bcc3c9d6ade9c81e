pub mod annuity;
pub mod error;
pub mod projections;
pub mod types;

pub use error::WealthCalcError;
pub use types::*;

/// Standard result type for all wealth-calc operations
pub type WealthCalcResult<T> = Result<T, WealthCalcError>;
