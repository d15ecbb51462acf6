/// Digit budget for rendering exact values as decimals. Encoding itself is
/// exact; these only bound what gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Fractional digits for model probabilities.
    pub probability_digits: usize,
    /// Fractional digits for the bounds of each narrowing step.
    pub bound_digits: usize,
    /// Fractional digits for the code.
    pub code_digits: usize,
}

impl Precision {
    pub const DEFAULT_PROBABILITY_DIGITS: usize = 150;
    pub const DEFAULT_BOUND_DIGITS: usize = 150;
    pub const DEFAULT_CODE_DIGITS: usize = 100;

    pub fn with_probability_digits(self, probability_digits: usize) -> Self {
        Self {
            probability_digits,
            ..self
        }
    }

    pub fn with_bound_digits(self, bound_digits: usize) -> Self {
        Self {
            bound_digits,
            ..self
        }
    }

    pub fn with_code_digits(self, code_digits: usize) -> Self {
        Self {
            code_digits,
            ..self
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            probability_digits: Self::DEFAULT_PROBABILITY_DIGITS,
            bound_digits: Self::DEFAULT_BOUND_DIGITS,
            code_digits: Self::DEFAULT_CODE_DIGITS,
        }
    }
}
