/// Smallest exponent `n` for which `2^(-n)` is tabulated.
pub const MIN_EXPONENT: u32 = 1;

/// Largest exponent `n` for which `2^(-n)` is tabulated.
/// Matches the 23-bit fraction field of the float the table serves.
pub const MAX_EXPONENT: u32 = 23;

/// Each refinement step scales the running value by one decimal place.
pub const DECIMAL_RADIX: u32 = 10;
