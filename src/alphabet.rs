use num::{BigInt, BigRational};
use std::fmt::Debug;
use std::hash::Hash;

/// An atomic unit of an input sequence.
pub trait Symbol: Eq + Hash + Copy + Debug + 'static {}

impl Symbol for char {}
impl Symbol for u8 {}

pub trait Alphabet {
    type S: Symbol;

    /// An iterator over the symbols in the alphabet, in canonical order.
    fn symbols(&self) -> impl Iterator<Item = &Self::S>;

    /// The number of times this symbol was observed. Dividing it by the
    /// total interval width yields the probability of the symbol. Symbols
    /// outside the alphabet have width zero.
    ///
    /// This is r_i.
    fn interval_width(&self, symbol: &Self::S) -> usize;

    /// The sum of all interval widths.
    /// This is R.
    fn total_interval_width(&self) -> usize {
        self.symbols().map(|s| self.interval_width(s)).sum()
    }

    /// The exact probability r_i / R. The alphabet must have a non-zero
    /// total width.
    fn probability(&self, symbol: &Self::S) -> BigRational {
        BigRational::new(
            BigInt::from(self.interval_width(symbol)),
            BigInt::from(self.total_interval_width()),
        )
    }
}
