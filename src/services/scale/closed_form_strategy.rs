use crate::errors::{AppErrors, AppResult};
use crate::models::internal::Internal;
use crate::services::scale::traits::scale_strategy_trait::ScaleStrategyTrait;

/// `2^(-n) = 5^n / 10^n`, and `5^n` is never divisible by ten, so the minimal
/// scale is always `n`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosedFormStrategy;

impl ScaleStrategyTrait for ClosedFormStrategy {
    fn scale(&self, exponent: u32) -> AppResult<Internal> {
        let scaled = 5u128.checked_pow(exponent).ok_or(AppErrors::Overflow)?;
        Ok(Internal(scaled, exponent))
    }
}
