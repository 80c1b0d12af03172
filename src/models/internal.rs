use std::fmt::{Display, Formatter};

/// Exact decimal form of `2^(-n)`: the scaled integer and the number of
/// decimal places it was scaled by, so that `2^(-n) = scaled * 10^(-scale)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Internal(pub u128, pub u32);

impl Internal {
    #[inline]
    pub fn scaled(self) -> u128 {
        self.0
    }
    #[inline]
    pub fn scale(self) -> u32 {
        self.1
    }
}

impl Display for Internal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Internal({}, {})", self.0, self.1)
    }
}

/// One generated map entry, keyed by the exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableEntry {
    pub exponent: u32,
    pub internal: Internal,
}

impl Display for TableEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}u32 => {},", self.exponent, self.internal)
    }
}
