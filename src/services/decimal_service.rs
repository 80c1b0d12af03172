use crate::errors::{AppErrors, AppResult};
use crate::models::scale_table::ScaleTable;

/// Renders `significand * 2^(-exponent)` as an exact decimal fraction.
///
/// The table supplies `2^(-exponent) = cur * 10^(-inc)`, so the digits after
/// the point are `significand * cur`, left-padded with zeros to `inc` places.
///
/// # Arguments
/// * `table` - Scale table covering the exponent.
/// * `significand` - Binary significand; must be below `2^exponent`.
/// * `exponent` - Number of binary places.
///
/// # Returns
/// * `AppResult<String>` - e.g. `"0.75"` for `(3, 2)`, or an `AppErrors` variant
///   if the exponent is not tabulated or the value is not below one.
pub fn render_fraction(table: &ScaleTable, significand: u128, exponent: u32) -> AppResult<String> {
    let internal = table
        .get(exponent)
        .ok_or(AppErrors::ExponentOutOfRange(exponent))?;
    if significand >> exponent != 0 {
        return Err(AppErrors::NotAFraction);
    }

    let digits = significand
        .checked_mul(internal.scaled())
        .ok_or(AppErrors::Overflow)?;
    let width = internal.scale() as usize;
    let padded = format!("{digits:0>width$}");
    let trimmed = padded.trim_end_matches('0');
    let frac = if trimmed.is_empty() { "0" } else { trimmed };
    Ok(format!("0.{frac}"))
}
