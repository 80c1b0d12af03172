use crate::errors::AppResult;
use crate::models::internal::Internal;

/// A way of finding the smallest decimal scale that turns `2^(-exponent)`
/// into an integer.
pub trait ScaleStrategyTrait {
    /// Computes the scaled integer and its scale for `2^(-exponent)`.
    ///
    /// # Returns
    /// * `AppResult<Internal>` - The exact pair, or `AppErrors::Overflow` if the
    ///   scaled integer does not fit in a `u128`.
    fn scale(&self, exponent: u32) -> AppResult<Internal>;
}
