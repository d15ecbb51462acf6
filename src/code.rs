use crate::decimal;
use crate::encoder::Interval;
use num::{BigInt, BigRational};
use std::fmt;

/// The number identifying an encoded sequence: the exact midpoint of the
/// final working interval.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(BigRational);

impl Code {
    pub fn midpoint(interval: &Interval) -> Self {
        let two = BigRational::from_integer(BigInt::from(2));
        Code((&interval.left + &interval.right) / two)
    }

    pub fn value(&self) -> &BigRational {
        &self.0
    }

    pub fn into_inner(self) -> BigRational {
        self.0
    }

    /// The code rounded to `digits` fractional digits.
    pub fn to_fixed(&self, digits: usize) -> String {
        decimal::to_fixed(&self.0, digits)
    }

    /// The fewest fractional digits at which the rounded code still falls
    /// inside `interval`. Rendering with fewer digits loses the input.
    /// `None` if the code is not inside `interval` at all.
    ///
    /// Every value with d digits also has d + 1 digits, so rounding to more
    /// digits never lands further from the code; the search doubles the
    /// digit count until it fits and then bisects.
    pub fn min_digits(&self, interval: &Interval) -> Option<usize> {
        if !interval.contains(&self.0) {
            return None;
        }
        let fits = |digits: usize| {
            let rounded = BigRational::new_raw(
                decimal::scaled_round(&self.0, digits),
                num::pow(BigInt::from(10), digits),
            );
            interval.contains(&rounded)
        };
        if fits(0) {
            return Some(0);
        }

        let (mut low, mut high) = (0, 1);
        while !fits(high) {
            low = high;
            high *= 2;
        }
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if fits(mid) {
                high = mid;
            } else {
                low = mid;
            }
        }
        Some(high)
    }
}

impl From<Code> for BigRational {
    fn from(code: Code) -> Self {
        code.0
    }
}

/// Exact fraction by default, fixed decimal when a precision is given.
impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(digits) => f.write_str(&self.to_fixed(digits)),
            None => write!(f, "{}", self.0),
        }
    }
}
