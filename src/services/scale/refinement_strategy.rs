use crate::consts::DECIMAL_RADIX;
use crate::errors::{AppErrors, AppResult};
use crate::models::internal::Internal;
use crate::services::scale::traits::scale_strategy_trait::ScaleStrategyTrait;
use log::trace;
use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::{One, ToPrimitive};

/// Starts from `2^(-n)` and multiplies by ten until the value is integral.
///
/// The running value is kept as an exact fraction `num / 2^n`, so the
/// integrality test is a divisibility check and never suffers rounding.
#[derive(Clone, Copy, Debug, Default)]
pub struct RefinementStrategy;

impl ScaleStrategyTrait for RefinementStrategy {
    fn scale(&self, exponent: u32) -> AppResult<Internal> {
        let den = BigUint::one() << exponent;
        let mut num = BigUint::one();
        let mut inc: u32 = 0;

        while !num.is_multiple_of(&den) {
            num *= DECIMAL_RADIX;
            inc = inc.checked_add(1).ok_or(AppErrors::Overflow)?;
            trace!("2^-{exponent}: step {inc}, numerator {num}");
        }

        let cur = (num / den).to_u128().ok_or(AppErrors::Overflow)?;
        Ok(Internal(cur, inc))
    }
}
