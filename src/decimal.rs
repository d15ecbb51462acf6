//! Fixed-point decimal rendering of exact rationals.

use num::{BigInt, BigRational, Integer, Signed};
use std::cmp::Ordering;

/// `value * 10^digits` rounded to the nearest integer, ties to even. The
/// denominator of `value` must be positive; it need not be reduced.
pub(crate) fn scaled_round(value: &BigRational, digits: usize) -> BigInt {
    let scaled: BigInt = value.numer() * num::pow(BigInt::from(10), digits);
    let (quotient, remainder): (BigInt, BigInt) = Integer::div_rem(&scaled, value.denom());
    // Truncating division: the remainder carries the sign of the numerator.
    let twice: BigInt = remainder.abs() * 2;
    let away = match twice.cmp(value.denom()) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => quotient.is_odd(),
    };
    if !away {
        quotient
    } else if scaled.is_negative() {
        quotient - 1
    } else {
        quotient + 1
    }
}

/// Round `value` to `digits` fractional decimal digits, ties to even.
pub fn round_to(value: &BigRational, digits: usize) -> BigRational {
    BigRational::new(
        scaled_round(value, digits),
        num::pow(BigInt::from(10), digits),
    )
}

/// Render `value` with exactly `digits` fractional digits, ties to even.
pub fn to_fixed(value: &BigRational, digits: usize) -> String {
    let rounded = scaled_round(value, digits);
    let negative = rounded.is_negative();
    let magnitude = rounded.abs().to_string();

    let mut out = String::with_capacity(magnitude.len() + digits + 3);
    if negative {
        out.push('-');
    }
    if digits == 0 {
        out.push_str(&magnitude);
        return out;
    }

    let padded = format!("{magnitude:0>width$}", width = digits + 1);
    let (integer, fraction) = padded.split_at(padded.len() - digits);
    out.push_str(integer);
    out.push('.');
    out.push_str(fraction);
    out
}
