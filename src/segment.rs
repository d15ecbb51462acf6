use crate::alphabet::{Alphabet, Symbol};
use num::{BigInt, BigRational, Zero};
use std::collections::HashMap;

/// The half-open sub-interval `[left, right)` of `[0, 1)` assigned to a
/// symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<S: Symbol> {
    pub symbol: S,
    pub left: BigRational,
    pub right: BigRational,
}

impl<S: Symbol> Segment<S> {
    pub fn width(&self) -> BigRational {
        &self.right - &self.left
    }

    pub fn contains(&self, point: &BigRational) -> bool {
        &self.left <= point && point < &self.right
    }
}

/// Integer bounds `[c_j, d_j)` of a segment, over the total width R.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bounds {
    pub(crate) lower: BigInt,
    pub(crate) upper: BigInt,
}

/// Mapping from symbol to segment. Iteration follows the order of the
/// alphabet the segments were built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<S: Symbol> {
    ordered: Vec<Segment<S>>,
    bounds: Vec<Bounds>,
    index: HashMap<S, usize>,
    total: BigInt,
}

impl<S: Symbol> Segments<S> {
    /// Partition `[0, 1)` among the symbols of the alphabet, in alphabet
    /// order, each segment as wide as the symbol's probability. Symbols of
    /// zero width get no segment.
    pub fn build<A>(alphabet: &A) -> Self
    where
        A: Alphabet<S = S>,
    {
        let total = BigInt::from(alphabet.total_interval_width());
        let mut ordered = Vec::new();
        let mut bounds = Vec::new();
        let mut index: HashMap<S, usize> = HashMap::new();
        // c_j: sum of the widths of all symbols before this one
        let mut cumulative = BigInt::zero();

        for symbol in alphabet.symbols() {
            let width = alphabet.interval_width(symbol);
            if width == 0 {
                log::debug!("no segment for zero-width symbol {symbol:?}");
                continue;
            }
            let upper = &cumulative + BigInt::from(width);
            index.insert(*symbol, ordered.len());
            ordered.push(Segment {
                symbol: *symbol,
                left: BigRational::new(cumulative.clone(), total.clone()),
                right: BigRational::new(upper.clone(), total.clone()),
            });
            bounds.push(Bounds {
                lower: cumulative,
                upper: upper.clone(),
            });
            cumulative = upper;
        }

        debug_assert!(ordered.is_empty() || cumulative == total);
        log::debug!("partitioned [0, 1) into {} segments", ordered.len());
        Segments {
            ordered,
            bounds,
            index,
            total,
        }
    }

    /// Integer bounds of a symbol's segment.
    pub(crate) fn bounds(&self, symbol: &S) -> Option<&Bounds> {
        self.index.get(symbol).map(|&i| &self.bounds[i])
    }

    /// R, the common denominator of all segment bounds.
    pub(crate) fn total(&self) -> &BigInt {
        &self.total
    }

    pub fn get(&self, symbol: &S) -> Option<&Segment<S>> {
        self.index.get(symbol).map(|&i| &self.ordered[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment<S>> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// The segment whose half-open interval contains `point`.
    pub fn locate(&self, point: &BigRational) -> Option<&Segment<S>> {
        self.ordered.iter().find(|segment| segment.contains(point))
    }
}

impl<'a, S: Symbol> IntoIterator for &'a Segments<S> {
    type Item = &'a Segment<S>;
    type IntoIter = std::slice::Iter<'a, Segment<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}
