use std::{
    fmt::{self, Display, Formatter},
    iter::Sum,
    ops::{Add, Mul},
};

use rust_decimal::Decimal;

use crate::MonoisotopicMass;

impl MonoisotopicMass {
    /// The number of decimal places masses are reported to
    pub const DECIMAL_PLACES: u32 = 9;

    /// Rounds to [`Self::DECIMAL_PLACES`] using banker's rounding (a midpoint rounds to the nearest even digit)
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(self.0.round_dp(Self::DECIMAL_PLACES))
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Mul<u32> for MonoisotopicMass {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for MonoisotopicMass {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

// NOTE: Forwards the formatter so that precision flags (like `{:.9}`) reach the underlying `Decimal`
impl Display for MonoisotopicMass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
